//! Text parsing and formatting of positions.
//!
//! The diagram format is 64 square characters in a1..h8 order followed by a
//! side-to-move character. Black discs are `X` (aliases `b`, `*`), white
//! discs `O` (alias `w`), empties `-` or `.`; whitespace between squares is
//! skipped. The side-to-move character decides which colour becomes the
//! mover bitboard.

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;
use super::state::Board;
use super::types::{Bitboard, Square};

impl Board {
    /// Render the position as a 65-character line (squares + side to move)
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut s = String::with_capacity(65);
        for i in 0..64 {
            let bit = 1u64 << i;
            s.push(if self.mover.0 & bit != 0 {
                'X'
            } else if self.opponent.0 & bit != 0 {
                'O'
            } else {
                '-'
            });
        }
        s.push('X');
        s
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut first = Bitboard::EMPTY;
        let mut second = Bitboard::EMPTY;
        let mut i = 0;
        let mut chars = s.chars();

        for c in chars.by_ref() {
            match c {
                'x' | 'X' | 'b' | 'B' | '*' => first.0 |= 1 << i,
                'o' | 'O' | 'w' | 'W' => second.0 |= 1 << i,
                '-' | '.' => {}
                _ => continue,
            }
            i += 1;
            if i == 64 {
                break;
            }
        }
        if i < 64 {
            return Err(ParseError::TooFewSquares { found: i });
        }

        for c in chars {
            match c {
                'x' | 'X' | 'b' | 'B' | '*' => return Ok(Board::from_bitboards(first, second)),
                'o' | 'O' | 'w' | 'W' => return Ok(Board::from_bitboards(second, first)),
                _ => continue,
            }
        }
        Err(ParseError::InvalidSideToMove)
    }
}

impl fmt::Display for Board {
    /// Grid with rank 1 at the top, mover discs as `X`, legal moves as `.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves = self.moves();
        writeln!(f, "  a b c d e f g h")?;
        for rank in 0..8 {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = Square(rank * 8 + file);
                let c = if self.mover.contains(sq) {
                    'X'
                } else if self.opponent.contains(sq) {
                    'O'
                } else if moves.contains(sq) {
                    '.'
                } else {
                    '-'
                };
                write!(f, "{c} ")?;
            }
            writeln!(f, "{}", rank + 1)?;
        }
        write!(f, "  a b c d e f g h    X to move")
    }
}
