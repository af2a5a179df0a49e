use ticklabs::domain::board::Board;
use ticklabs::infrastructure::display::{render_board, render_board_plain};

#[test]
fn test_plain_render_layout() {
    let board = Board::from_rows(["X.O", ".X.", "O.."]);
    let output = render_board_plain(&board);
    println!("{}", output);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["X|.|O", "-----", ".|X|.", "-----", "O|.|."]);
}

#[test]
fn test_colored_render_keeps_marks() {
    let board = Board::from_rows(["X..", "...", "..O"]);
    let output = render_board(&board);

    assert!(output.contains("\x1b["));
    assert!(output.contains('X'));
    assert!(output.contains('O'));
    assert_eq!(output.lines().count(), 5);
}
