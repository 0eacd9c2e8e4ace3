use std::fmt;

use serde::{Deserialize, Serialize};

pub const WIN_LENGTH: usize = 5;
pub const MIN_BOARD_SIZE: usize = WIN_LENGTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn stone_name(&self) -> &'static str {
        match self {
            Player::First => "Black",
            Player::Second => "White",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stone_name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn occupant(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(*player),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Resolves signed coordinates coming from outside the core. Negative values
    /// can never address a cell.
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayer,
    PlayerVsBot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position) -> Self {
        Self { player, start, end }
    }

    pub fn len(&self) -> usize {
        self.start.row.abs_diff(self.end.row).max(self.start.col.abs_diff(self.end.col)) + 1
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let step = |from: usize, to: usize| (to as isize - from as isize).signum();
        let dr = step(self.start.row, self.end.row);
        let dc = step(self.start.col, self.end.col);
        (0..self.len() as isize).map(move |i| {
            Position::new(
                (self.start.row as isize + dr * i) as usize,
                (self.start.col as isize + dc * i) as usize,
            )
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells().any(|cell| cell == pos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next: Player },
    Won(Player),
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    InvalidCoordinate { row: i64, col: i64, size: usize },
    CellOccupied(Position),
    OutOfTurn { expected: Player, actual: Player },
    GameOver,
    NoActiveGame,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidCoordinate { row, col, size } => write!(
                f,
                "Position ({}, {}) is outside the {}x{} board",
                row, col, size, size
            ),
            MoveError::CellOccupied(pos) => write!(f, "Cell {} is already occupied", pos),
            MoveError::OutOfTurn { expected, actual } => {
                write!(f, "Not {}'s turn, {} to move", actual, expected)
            }
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NoActiveGame => write!(f, "No game has been started"),
        }
    }
}

impl std::error::Error for MoveError {}
