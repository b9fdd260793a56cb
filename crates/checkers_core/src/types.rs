use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardParseError;

pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
    /// Row delta of a forward step. PlayerOne advances toward row 7.
    pub fn forward(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }
    /// The row on which this player's men are crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Player::One => BOARD_SIZE - 1,
            Player::Two => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    pub fn man(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }
    pub fn king(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    pub fn to_char(self) -> char {
        match (self.owner, self.rank) {
            (Player::One, Rank::Man) => 'o',
            (Player::One, Rank::King) => 'O',
            (Player::Two, Rank::Man) => 'x',
            (Player::Two, Rank::King) => 'X',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'o' => Some(Piece::man(Player::One)),
            'O' => Some(Piece::king(Player::One)),
            'x' => Some(Piece::man(Player::Two)),
            'X' => Some(Piece::king(Player::Two)),
            _ => None,
        }
    }
}

/// A board coordinate. Row 0 holds PlayerOne's starting men.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: i8,
    col: i8,
}

/// Unchecked wire form of [`Square`].
#[derive(Deserialize)]
struct RawSquare {
    row: i8,
    col: i8,
}

impl TryFrom<RawSquare> for Square {
    type Error = BoardParseError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.col)
            .ok_or_else(|| BoardParseError::BadSquare(format!("({}, {})", raw.row, raw.col)))
    }
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Builds a square from an index in `0..64`, row-major.
    pub fn from_index(idx: usize) -> Square {
        debug_assert!(idx < 64);
        Square {
            row: (idx / 8) as i8,
            col: (idx % 8) as i8,
        }
    }

    pub fn row(self) -> i8 {
        self.row
    }
    pub fn col(self) -> i8 {
        self.col
    }
    pub fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row + dr, self.col + dc)
    }

    /// Squares where men may stand: the alternating pattern used by setup.
    pub fn is_playable(self) -> bool {
        self.row % 2 == self.col % 2
    }

    /// Every square in board-scan order (row 0 first, columns ascending).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.trim().as_bytes();
        if b.len() != 2 || !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return Err(BoardParseError::BadSquare(s.to_string()));
        }
        let col = (b[0] - b'a') as i8;
        let row = (b[1] - b'1') as i8;
        Ok(Square { row, col })
    }
}

/// Origin followed by one or more landing squares.
///
/// A two-square path whose squares are adjacent is a plain step; otherwise
/// every consecutive pair is a jump over one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    path: Vec<Square>,
}

#[derive(Deserialize)]
struct RawMove {
    path: Vec<Square>,
}

impl TryFrom<RawMove> for Move {
    type Error = BoardParseError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        let len = raw.path.len();
        Move::from_path(raw.path).ok_or(BoardParseError::ShortPath(len))
    }
}

impl Move {
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            path: vec![from, to],
        }
    }

    /// Returns `None` for a path shorter than two squares.
    pub fn from_path(path: Vec<Square>) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }
        Some(Self { path })
    }

    pub fn path(&self) -> &[Square] {
        &self.path
    }
    pub fn origin(&self) -> Square {
        self.path[0]
    }
    pub fn destination(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    pub fn is_capture(&self) -> bool {
        (self.path[1].row() - self.path[0].row()).abs() == 2
    }

    /// Number of pieces taken by this move.
    pub fn jumps(&self) -> usize {
        if self.is_capture() {
            self.path.len() - 1
        } else {
            0
        }
    }

    /// Consecutive (from, to) pairs, one per executor transition.
    pub fn legs(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "-" };
        for (i, sq) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

/// Square between two squares one jump apart.
pub fn midpoint(from: Square, to: Square) -> Option<Square> {
    if (to.row() - from.row()).abs() != 2 || (to.col() - from.col()).abs() != 2 {
        return None;
    }
    Square::new((from.row() + to.row()) / 2, (from.col() + to.col()) / 2)
}
