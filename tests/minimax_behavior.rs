use ticklabs::domain::board::Board;
use ticklabs::domain::models::{Move, Score, Side};
use ticklabs::domain::rules::Rules;
use ticklabs::domain::services::MoveStrategy;
use ticklabs::infrastructure::ai::Minimax;

fn mv(row: usize, column: usize) -> Move {
    Move::new(row, column).unwrap()
}

#[test]
fn test_empty_board_plays_center_without_search() {
    let minimax = Minimax::new();
    let board = Board::new();

    assert_eq!(minimax.compute_next_move(&board, Side::Player), Some(Move::CENTER));
    assert_eq!(minimax.nodes_searched(), 0);
    assert_eq!(minimax.compute_next_move(&board, Side::Opponent), Some(Move::CENTER));
}

#[test]
fn test_takes_winning_move() {
    let minimax = Minimax::new();
    let board = Board::from_rows(["XX.", "OO.", "..."]);

    assert_eq!(minimax.compute_next_move(&board, Side::Player), Some(mv(0, 2)));
    assert!(minimax.nodes_searched() > 0);
}

#[test]
fn test_blocks_immediate_threat() {
    let minimax = Minimax::new();
    let board = Board::from_rows(["XX.", ".O.", "..."]);

    assert_eq!(minimax.compute_next_move(&board, Side::Opponent), Some(mv(0, 2)));
}

#[test]
fn test_equal_scores_resolve_to_first_in_row_major_order() {
    // Both (0, 2) and (2, 2) complete a line for X.
    let minimax = Minimax::new();
    let board = Board::from_rows(["XX.", "OX.", "OO."]);

    assert_eq!(minimax.compute_next_move(&board, Side::Player), Some(mv(0, 2)));
}

#[test]
fn test_terminal_or_full_board_has_no_move() {
    let minimax = Minimax::new();

    let won = Board::from_rows(["XXX", "OO.", "..."]);
    assert_eq!(minimax.compute_next_move(&won, Side::Opponent), None);

    let full = Board::from_rows(["XOX", "XOO", "OXX"]);
    assert_eq!(minimax.compute_next_move(&full, Side::Player), None);
}

#[test]
fn test_board_is_untouched_by_search() {
    let minimax = Minimax::new();
    let board = Board::from_rows(["X..", ".O.", "..X"]);
    let before = board;

    let chosen = minimax.compute_next_move(&board, Side::Opponent).unwrap();

    assert_eq!(board, before);
    assert!(board.is_vacant(chosen));
}

#[test]
fn test_parallel_root_matches_serial() {
    let serial = Minimax::new();
    let parallel = Minimax::new().with_parallel_root(true);

    let positions = [
        (Board::from_rows(["X..", "...", "..."]), Side::Opponent),
        (Board::from_rows(["X..", ".O.", "..X"]), Side::Opponent),
        (Board::from_rows(["XO.", ".X.", "..."]), Side::Opponent),
        (Board::from_rows(["...", ".X.", "..O"]), Side::Player),
    ];

    for (board, side) in positions {
        assert_eq!(
            serial.compute_next_move(&board, side),
            parallel.compute_next_move(&board, side),
            "{:?}",
            board
        );
        assert_eq!(serial.nodes_searched(), parallel.nodes_searched());
    }
}

/// Plays `engine` as `engine_side` against every possible sequence of
/// replies and returns the worst result for the engine.
fn worst_outcome(engine: &mut Minimax, board: Board, to_move: Side, engine_side: Side) -> Score {
    let outcome = Rules::outcome(&board);
    if outcome.is_game_over() {
        return outcome;
    }

    if to_move == engine_side {
        let chosen = engine.next_move(&board, to_move).unwrap();
        assert!(board.is_vacant(chosen));
        return worst_outcome(engine, board.with(chosen, to_move), to_move.opponent(), engine_side);
    }

    let mut worst = engine_side.wins();
    for reply in board.vacancies() {
        let result = worst_outcome(engine, board.with(reply, to_move), to_move.opponent(), engine_side);
        if result == engine_side.opponent().wins() {
            return result;
        }
        if result == Score::Draw {
            worst = Score::Draw;
        }
    }
    worst
}

#[test]
fn test_never_loses_as_second_player() {
    let mut engine = Minimax::new();
    let result = worst_outcome(&mut engine, Board::new(), Side::Player, Side::Opponent);
    assert_ne!(result, Score::PlayerWins);
}

#[test]
fn test_never_loses_as_first_player() {
    let mut engine = Minimax::new();
    let result = worst_outcome(&mut engine, Board::new(), Side::Player, Side::Player);
    assert_ne!(result, Score::OpponentWins);
}

#[test]
fn test_never_loses_from_corner_opening() {
    let mut engine = Minimax::new();
    let board = Board::from_rows(["X..", "...", "..."]);
    let result = worst_outcome(&mut engine, board, Side::Opponent, Side::Opponent);
    assert_ne!(result, Score::PlayerWins);
}
