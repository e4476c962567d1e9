//! Cell storage, neighbor topology and ownership counters.
//!
//! Cells live in a flat row-major arena. Neighbor links are indices into
//! that arena, computed once at construction and never changed; a new board
//! size means a new [`Grid`].

use crate::size::clamp_dimension;
use crate::types::PlayerSlot;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A cell coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Coordinate outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Coordinate {} is outside the {}x{} grid", coord, rows, cols)]
pub struct GridError {
    /// The rejected coordinate.
    pub coord: Coord,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
}

/// Arena indices of a cell's orthogonal neighbors; `None` at a board edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    /// Cell above.
    pub north: Option<usize>,
    /// Cell below.
    pub south: Option<usize>,
    /// Cell to the right.
    pub east: Option<usize>,
    /// Cell to the left.
    pub west: Option<usize>,
}

impl Neighbors {
    /// Present neighbors in north, south, east, west order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        [self.north, self.south, self.east, self.west]
            .into_iter()
            .flatten()
    }

    /// Number of present neighbors: 2 at a corner, 3 on an edge, 4 inside.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// One box of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    points: u8,
    owner: Option<PlayerSlot>,
    neighbors: Neighbors,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            points: 1,
            owner: None,
            neighbors: Neighbors::default(),
        }
    }

    /// Position of this cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Current point count.
    pub fn points(&self) -> u8 {
        self.points
    }

    /// Current owner, if captured.
    pub fn owner(&self) -> Option<PlayerSlot> {
        self.owner
    }

    /// Neighbor links.
    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    /// Number of neighbors; the cell explodes when its points exceed this.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.count()
    }
}

/// Aggregate ownership counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipCounts {
    /// Cells on the board.
    pub total: usize,
    /// Cells owned by player one.
    pub player_one: usize,
    /// Cells owned by player two.
    pub player_two: usize,
    /// Cells nobody has captured yet.
    pub unowned: usize,
}

impl OwnershipCounts {
    fn fresh(total: usize) -> Self {
        Self {
            total,
            player_one: 0,
            player_two: 0,
            unowned: total,
        }
    }

    /// Cells owned by `slot`.
    pub fn owned_by(&self, slot: PlayerSlot) -> usize {
        match slot {
            PlayerSlot::One => self.player_one,
            PlayerSlot::Two => self.player_two,
        }
    }

    fn owned_by_mut(&mut self, slot: PlayerSlot) -> &mut usize {
        match slot {
            PlayerSlot::One => &mut self.player_one,
            PlayerSlot::Two => &mut self.player_two,
        }
    }

    /// Whether the three partitions sum to the total.
    pub fn is_balanced(&self) -> bool {
        self.player_one + self.player_two + self.unowned == self.total
    }
}

/// R×C board of cells with ownership bookkeeping.
///
/// All ownership changes go through [`Grid::set_owner`], the only place the
/// counters move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    counts: OwnershipCounts,
}

impl Grid {
    /// Creates a grid, clamping `rows` and `cols` into the allowed range.
    ///
    /// Every cell starts unowned with one point.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = clamp_dimension(rows);
        let cols = clamp_dimension(cols);
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Coord::new(row, col))))
            .collect();

        let mut grid = Self {
            rows,
            cols,
            cells,
            counts: OwnershipCounts::fresh(rows * cols),
        };
        grid.link_neighbors();
        debug!(rows, cols, "Grid constructed");
        grid
    }

    fn link_neighbors(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        for row in 0..rows {
            for col in 0..cols {
                let index = row * cols + col;
                self.cells[index].neighbors = Neighbors {
                    north: (row > 0).then(|| index - cols),
                    south: (row + 1 < rows).then(|| index + cols),
                    east: (col + 1 < cols).then(|| index + 1),
                    west: (col > 0).then(|| index - 1),
                };
            }
        }
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; grids have at least 5×5 cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Arena index of `coord`, if it lies on the board.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.row * self.cols + coord.col)
    }

    /// Arena index of `(row, col)`, or an error naming the bounds.
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        let coord = Coord::new(row, col);
        self.index_of(coord).ok_or(GridError {
            coord,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Arena index of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid. Callers derive
    /// coordinates from [`Grid::rows`] and [`Grid::cols`].
    pub fn index_at(&self, row: usize, col: usize) -> usize {
        match self.checked_index(row, col) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Checked lookup.
    pub fn try_cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.checked_index(row, col).map(|index| &self.cells[index])
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index_at(row, col)]
    }

    /// Cell by arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current ownership counters.
    pub fn counts(&self) -> OwnershipCounts {
        self.counts
    }

    /// Assigns the cell at `index` to `slot`, keeping the counters in step.
    ///
    /// Reassigning a cell to its current owner changes nothing. There is no
    /// way to un-own a captured cell.
    pub fn set_owner(&mut self, index: usize, slot: PlayerSlot) {
        let previous = self.cells[index].owner;
        match previous {
            None => {
                self.counts.unowned -= 1;
                *self.counts.owned_by_mut(slot) += 1;
            }
            Some(current) if current == slot => {}
            Some(current) => {
                *self.counts.owned_by_mut(current) -= 1;
                *self.counts.owned_by_mut(slot) += 1;
            }
        }
        self.cells[index].owner = Some(slot);
    }

    /// Adds one point to the cell at `index` and returns the new count.
    pub(crate) fn add_point(&mut self, index: usize) -> u8 {
        let cell = &mut self.cells[index];
        cell.points += 1;
        cell.points
    }

    /// Resets an exploded cell back to one point.
    pub(crate) fn reset_points(&mut self, index: usize) {
        self.cells[index].points = 1;
    }

    /// Places an owner and point count directly, for building test positions.
    #[cfg(test)]
    pub(crate) fn seed(&mut self, row: usize, col: usize, owner: PlayerSlot, points: u8) {
        let index = self.index_at(row, col);
        self.set_owner(index, owner);
        self.cells[index].points = points;
    }

    /// Overwrites a cell's points without any bookkeeping, for corrupting
    /// positions in invariant tests.
    #[cfg(test)]
    pub(crate) fn force_points(&mut self, row: usize, col: usize, points: u8) {
        let index = self.index_at(row, col);
        self.cells[index].points = points;
    }

    /// Overwrites the counters, for corrupting positions in invariant tests.
    #[cfg(test)]
    pub(crate) fn force_counts(&mut self, counts: OwnershipCounts) {
        self.counts = counts;
    }
}

impl Default for Grid {
    fn default() -> Self {
        let size = crate::size::BoardSize::default().dimension();
        Self::new(size, size)
    }
}
