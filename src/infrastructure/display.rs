use crate::domain::board::Board;
use crate::domain::models::{BOARD_COLUMNS, BOARD_ROWS, Move, Square};

const COLOR_RESET: &str = "\x1b[0m";
const COLOR_X: &str = "\x1b[37m";
const COLOR_O: &str = "\x1b[31m";
const COLOR_DIM: &str = "\x1b[90m";

/// Board with ANSI colours, for the terminal.
pub fn render_board(board: &Board) -> String {
    render(board, true)
}

/// Board as bare `X`/`O`/`.` with `|` and `-` separators.
pub fn render_board_plain(board: &Board) -> String {
    render(board, false)
}

fn render(board: &Board, colored: bool) -> String {
    let paint = |out: &mut String, glyph: char, color: &str| {
        if colored {
            out.push_str(color);
            out.push(glyph);
            out.push_str(COLOR_RESET);
        } else {
            out.push(glyph);
        }
    };

    let mut out = String::new();
    for row in 0..BOARD_ROWS {
        if row > 0 {
            for _ in 0..BOARD_COLUMNS * 2 - 1 {
                paint(&mut out, '-', COLOR_DIM);
            }
            out.push('\n');
        }
        for column in 0..BOARD_COLUMNS {
            if column > 0 {
                paint(&mut out, '|', COLOR_DIM);
            }
            let square = Move::new(row, column).map_or(Square::Empty, |mv| board.get(mv));
            let color = match square {
                Square::Empty => COLOR_DIM,
                Square::Player => COLOR_X,
                Square::Opponent => COLOR_O,
            };
            paint(&mut out, square.symbol(), color);
        }
        out.push('\n');
    }
    out
}
