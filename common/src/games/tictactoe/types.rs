use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which row, column or diagonal a line was taken from. Shifted diagonals
/// carry their offset from the primary diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
    MainShiftedRight(usize),
    MainShiftedLeft(usize),
    AntiShiftedRight(usize),
    AntiShiftedLeft(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub kind: LineKind,
    pub cells: Vec<Position>,
}

impl WinningLine {
    pub fn new(player: Player, kind: LineKind, cells: Vec<Position>) -> Self {
        Self { player, kind, cells }
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinResult {
    Ongoing,
    Win(WinningLine),
    Draw,
}

impl WinResult {
    pub fn outcome(&self) -> Outcome {
        match self {
            WinResult::Ongoing => Outcome::Ongoing,
            WinResult::Win(_) => Outcome::Win,
            WinResult::Draw => Outcome::Draw,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            WinResult::Win(line) => Some(line.player),
            _ => None,
        }
    }

    pub fn winning_cells(&self) -> Option<&[Position]> {
        match self {
            WinResult::Win(line) => Some(&line.cells),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, WinResult::Ongoing)
    }
}
