use crate::domain::models::{BOARD_COLUMNS, BOARD_ROWS, Move, MoveError, Side, Square};
use smallvec::SmallVec;
use std::fmt;

pub type MoveList = SmallVec<[Move; 9]>;

/// The 3x3 tic-tac-toe grid.
///
/// The board does not enforce alternating turns; callers place marks in
/// whatever order their game logic dictates.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Square; BOARD_COLUMNS]; BOARD_ROWS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three row strings of `X`, `O` and `.`/space.
    /// Any other character is read as empty.
    pub fn from_rows(rows: [&str; BOARD_ROWS]) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(BOARD_COLUMNS).enumerate() {
                board.squares[r][c] = match ch {
                    'X' | 'x' => Square::Player,
                    'O' | 'o' => Square::Opponent,
                    _ => Square::Empty,
                };
            }
        }
        board
    }

    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.row()][mv.column()]
    }

    pub fn is_vacant(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    pub fn place(&mut self, mv: Move, side: Side) -> Result<(), MoveError> {
        if !self.is_vacant(mv) {
            return Err(MoveError::SquareOccupied(mv));
        }
        self.squares[mv.row()][mv.column()] = side.square();
        Ok(())
    }

    /// Copy of this board with `side` marked at `mv`, occupied or not.
    pub fn with(&self, mv: Move, side: Side) -> Self {
        let mut next = *self;
        next.squares[mv.row()][mv.column()] = side.square();
        next
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Vacant squares in row-major order.
    pub fn vacancies(&self) -> MoveList {
        self.moves()
            .filter(|mv| self.is_vacant(*mv))
            .collect()
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> MoveList {
        self.moves()
            .filter(|mv| !self.is_vacant(*mv))
            .collect()
    }

    pub fn mark_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| !sq.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.mark_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == BOARD_ROWS * BOARD_COLUMNS
    }

    fn moves(&self) -> impl Iterator<Item = Move> {
        (0..BOARD_ROWS * BOARD_COLUMNS).filter_map(Move::from_index)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.squares.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for sq in row {
                write!(f, "{}", sq.symbol())?;
            }
        }
        Ok(())
    }
}
