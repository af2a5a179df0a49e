use std::fmt::{self, Debug};

pub const BOARD_ROWS: usize = 3;
pub const BOARD_COLUMNS: usize = 3;

/// The two sides of a tic-tac-toe game.
///
/// `Player` is the maximizing side and draws X; `Opponent` is the minimizing
/// side and draws O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opponent(&self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn is_maximizing(&self) -> bool {
        matches!(self, Side::Player)
    }

    pub fn square(&self) -> Square {
        match self {
            Side::Player => Square::Player,
            Side::Opponent => Square::Opponent,
        }
    }

    pub fn wins(&self) -> Score {
        match self {
            Side::Player => Score::PlayerWins,
            Side::Opponent => Score::OpponentWins,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Square {
    #[default]
    Empty,
    Player,
    Opponent,
}

impl Square {
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn symbol(&self) -> char {
        match self {
            Square::Empty => '.',
            Square::Player => 'X',
            Square::Opponent => 'O',
        }
    }
}

/// A (row, column) pair on the 3x3 board, both in `0..=2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: u8,
    column: u8,
}

impl Move {
    pub const CENTER: Move = Move { row: 1, column: 1 };

    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < BOARD_ROWS && column < BOARD_COLUMNS {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..9`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / BOARD_COLUMNS, index % BOARD_COLUMNS)
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.column as usize
    }

    pub fn index(&self) -> usize {
        self.row() * BOARD_COLUMNS + self.column()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Categorical board outcome. The numeric values only order outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Score {
    PlayerWins,
    OpponentWins,
    Draw,
    NotTerminal,
}

impl Score {
    pub fn value(&self) -> i8 {
        match self {
            Score::PlayerWins => 10,
            Score::OpponentWins => -10,
            Score::Draw => 0,
            Score::NotTerminal => -1,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, Score::NotTerminal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Move),
}

impl std::error::Error for MoveError {}
