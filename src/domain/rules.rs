use crate::domain::board::Board;
use crate::domain::models::{Move, Score, Side};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub struct Rules;

impl Rules {
    /// Scores `board` assuming `last_mover` placed the most recent mark.
    ///
    /// Only `last_mover` could have just completed a line, so only its lines
    /// are scanned. A full board without such a line is a draw.
    pub fn score_board(board: &Board, last_mover: Side) -> Score {
        if Self::has_line(board, last_mover) {
            return last_mover.wins();
        }
        if board.is_full() {
            Score::Draw
        } else {
            Score::NotTerminal
        }
    }

    /// Scans both sides. Agrees with [`Rules::score_board`] on every board
    /// reachable by alternating play when `last_mover` is the side that moved.
    pub fn outcome(board: &Board) -> Score {
        if Self::has_line(board, Side::Player) {
            Score::PlayerWins
        } else if Self::has_line(board, Side::Opponent) {
            Score::OpponentWins
        } else if board.is_full() {
            Score::Draw
        } else {
            Score::NotTerminal
        }
    }

    pub fn has_line(board: &Board, side: Side) -> bool {
        let mark = side.square();
        LINES.iter().any(|line| {
            line.iter().all(|&(r, c)| {
                Move::new(r, c).is_some_and(|mv| board.get(mv) == mark)
            })
        })
    }
}
