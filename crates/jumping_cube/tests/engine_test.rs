//! Tests for the public engine API.

use jumping_cube::{
    BoardSize, Color, GameEngine, GamePhase, MoveOutcome, NamedColor, PlayerSlot, Rejection,
    Roster, new_game,
};

fn small_game() -> GameEngine {
    GameEngine::with_size(BoardSize::Five, Roster::default())
}

#[test]
fn test_every_first_move_switches_turn() {
    for row in 0..5 {
        for col in 0..5 {
            let mut game = small_game();
            assert_eq!(
                game.apply_move(row, col),
                MoveOutcome::TurnSwitched(PlayerSlot::Two)
            );
        }
    }
}

#[test]
fn test_second_player_cannot_take_first_players_cell() {
    let mut game = small_game();
    game.apply_move(2, 3);

    assert_eq!(
        game.apply_move(2, 3),
        MoveOutcome::Rejected(Rejection::OwnedByOpponent(PlayerSlot::One))
    );
    assert_eq!(game.active_player(), PlayerSlot::Two);
    assert_eq!(game.phase(), GamePhase::AwaitingMove(PlayerSlot::Two));
}

#[test]
fn test_players_alternate() {
    let mut game = small_game();
    let moves = [(0, 0), (4, 4), (0, 4), (4, 0)];
    let mut expected = PlayerSlot::Two;
    for (row, col) in moves {
        assert_eq!(game.apply_move(row, col), MoveOutcome::TurnSwitched(expected));
        expected = expected.opponent();
    }
    let movers: Vec<PlayerSlot> = game.history().iter().map(|m| m.player).collect();
    assert_eq!(
        movers,
        vec![PlayerSlot::One, PlayerSlot::Two, PlayerSlot::One, PlayerSlot::Two]
    );
}

#[test]
fn test_replaying_own_corner_explodes() {
    let mut game = small_game();
    game.apply_move(0, 0); // One: 2 points
    game.apply_move(4, 4); // Two
    let outcome = game.apply_move(0, 0); // One: 3 > 2, explodes

    assert_eq!(outcome, MoveOutcome::TurnSwitched(PlayerSlot::Two));
    assert_eq!(game.cell_points(0, 0), 1);
    assert_eq!(game.cell_owner(1, 0), Some(PlayerSlot::One));
    assert_eq!(game.cell_owner(0, 1), Some(PlayerSlot::One));
    assert_eq!(game.cell_points(1, 0), 2);
    assert_eq!(game.cell_points(0, 1), 2);
    assert_eq!(game.owned_count(PlayerSlot::One), 3);
    assert_eq!(*game.last_cascade().explosions(), 1);
}

#[test]
fn test_queries_are_idempotent() {
    let mut game = small_game();
    game.apply_move(1, 1);
    game.apply_move(3, 3);

    assert_eq!(game.counts(), game.counts());
    assert_eq!(game.cell_owner(1, 1), game.cell_owner(1, 1));
    assert_eq!(game.cell_points(3, 3), game.cell_points(3, 3));
    assert_eq!(game.active_player(), game.active_player());
    assert_eq!(game.winner(), game.winner());
    assert_eq!(game.snapshot(), game.snapshot());
}

#[test]
fn test_rename_after_capturing_cells() {
    let mut game = small_game();
    game.apply_move(0, 0);
    game.apply_move(2, 2);
    game.apply_move(0, 0);
    let owned = game.owned_count(PlayerSlot::One);
    assert_eq!(owned, 3);

    game.rename_player(PlayerSlot::One, "Grace");
    game.recolor_player(PlayerSlot::One, "#00aa00".parse().unwrap());

    assert_eq!(game.owned_count(PlayerSlot::One), owned);
    let snapshot = game.snapshot();
    let owner = snapshot.cell(1, 0).unwrap().owner.unwrap();
    assert_eq!(snapshot.players[owner].name(), "Grace");
    assert_eq!(snapshot.players[owner].color().to_hex(), "#00aa00");
}

#[test]
fn test_new_game_clamps_dimensions() {
    let red: Color = NamedColor::Red.into();
    let blue: Color = NamedColor::Blue.into();
    let game = new_game(3, 12, "A", red, "B", blue);
    assert_eq!((game.rows(), game.cols()), (5, 10));
    assert_eq!(game.unowned_count(), 50);
    assert_eq!(game.player(PlayerSlot::Two).name(), "B");
}

#[test]
fn test_independent_games_do_not_interfere() {
    let mut first = small_game();
    let mut second = small_game();
    first.apply_move(0, 0);
    assert_eq!(second.unowned_count(), 25);
    second.apply_move(4, 4);
    assert_eq!(first.cell_owner(4, 4), None);
    assert_eq!(second.cell_owner(0, 0), None);
}
