use std::fmt;
use std::str::FromStr;

use crate::error::BoardParseError;
use crate::types::*;

/// Pieces per side after standard setup.
pub const MAX_PIECES: u32 = 12;

/// The 8x8 grid. Pure data: legality lives in [`crate::game::Game`].
///
/// Copying a board yields an independent snapshot, which is how the path
/// enumerator and the heuristic engine simulate moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Twelve men per side on the playable squares of rows 0-2 and 5-7.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for sq in Square::all().filter(|s| s.is_playable()) {
            if sq.row() < 3 {
                b.set_piece(sq, Some(Piece::man(Player::One)));
            } else if sq.row() >= BOARD_SIZE - 3 {
                b.set_piece(sq, Some(Piece::man(Player::Two)));
            }
        }
        b
    }

    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut b = Board::empty();
        for &(sq, pc) in pieces {
            b.set_piece(sq, Some(pc));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }
    pub fn owner_at(&self, sq: Square) -> Option<Player> {
        self.piece_at(sq).map(|pc| pc.owner)
    }

    /// Squares holding `player`'s pieces, in board-scan order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(pc) if pc.owner == player => Some((sq, pc)),
            _ => None,
        })
    }

    /// Full scan. Live games track counts incrementally instead.
    pub fn count(&self, player: Player) -> u32 {
        self.pieces_of(player).count() as u32
    }

    /// Crowns a man standing on its promotion row. Returns true if it did.
    pub fn promote_if_due(&mut self, sq: Square) -> bool {
        match self.piece_at(sq) {
            Some(pc) if pc.rank == Rank::Man && sq.row() == pc.owner.promotion_row() => {
                self.set_piece(sq, Some(Piece::king(pc.owner)));
                true
            }
            _ => false,
        }
    }

    /// Moves whatever is on `from` to `to`, removing the jumped piece for a
    /// two-square leg, and crowns on arrival. No legality checks.
    pub fn apply_leg(&mut self, from: Square, to: Square) {
        let moved = self.piece_at(from);
        if let Some(mid) = midpoint(from, to) {
            self.set_piece(mid, None);
        }
        self.set_piece(from, None);
        self.set_piece(to, moved);
        self.promote_if_due(to);
    }

    /// Replays every leg of `mv`. Assumes the move was generated for this board.
    pub fn apply_move(&mut self, mv: &Move) {
        for (from, to) in mv.legs() {
            self.apply_leg(from, to);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                let ch = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_char);
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses eight lines, the first being row 7. Spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (line_idx, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(BoardParseError::RowWidth {
                    row: line_idx,
                    found: cells.len(),
                });
            }
            let row = BOARD_SIZE - 1 - line_idx as i8;
            for (col, ch) in cells.into_iter().enumerate() {
                let Some(sq) = Square::new(row, col as i8) else {
                    continue;
                };
                match ch {
                    '.' | '_' => {}
                    _ => {
                        let pc = Piece::from_char(ch).ok_or(BoardParseError::BadPiece(ch))?;
                        board.set_piece(sq, Some(pc));
                    }
                }
            }
        }
        Ok(board)
    }
}
