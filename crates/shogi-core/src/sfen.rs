//! SFEN (Shogi Forsyth-Edwards Notation) parsing and serialization.
//!
//! Board rows are listed from rank 8 down to rank 0 and, within a row, from
//! file 0 to file 8. Uppercase letters belong to [`Player::First`], and a `+`
//! prefix marks a promoted piece.

use crate::{BoardLayout, PieceKind, Player, Square};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing SFEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SfenError {
    #[error("invalid SFEN: expected 4 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'b' or 'w', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid hand: {0}")]
    InvalidHand(String),

    #[error("invalid move number: {0}")]
    InvalidMoveNumber(String),
}

/// Per-player hand counts keyed by base kind.
pub type HandCounts = BTreeMap<PieceKind, u32>;

/// Parsed SFEN data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sfen {
    /// Piece placement.
    pub layout: BoardLayout,
    /// The player to move.
    pub side_to_move: Player,
    /// Pieces in hand, indexed by [`Player::index`].
    pub hands: [HandCounts; 2],
    /// Move number (ply count, starting at 1).
    pub move_number: u32,
}

impl Sfen {
    /// The standard starting position SFEN.
    pub const STARTPOS: &'static str =
        "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

    /// Parses a SFEN string.
    pub fn parse(sfen: &str) -> Result<Self, SfenError> {
        let parts: Vec<&str> = sfen.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(SfenError::InvalidPartCount(parts.len()));
        }

        let layout = Self::parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "b" => Player::First,
            "w" => Player::Second,
            other => return Err(SfenError::InvalidSideToMove(other.to_string())),
        };

        let hands = Self::parse_hands(parts[2])?;

        let move_number = parts[3]
            .parse::<u32>()
            .map_err(|_| SfenError::InvalidMoveNumber(parts[3].to_string()))?;

        Ok(Sfen {
            layout,
            side_to_move,
            hands,
            move_number,
        })
    }

    fn parse_placement(placement: &str) -> Result<BoardLayout, SfenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != Square::RANKS as usize {
            return Err(SfenError::InvalidPiecePlacement(format!(
                "expected {} rows, got {}",
                Square::RANKS,
                rows.len()
            )));
        }

        let mut layout = BoardLayout::empty();
        for (i, row) in rows.iter().enumerate() {
            let rank = Square::RANKS - 1 - i as u8;
            let mut file = 0u8;
            let mut promoted = false;
            for c in row.chars() {
                if let Some(n) = c.to_digit(10) {
                    if promoted || n == 0 {
                        return Err(SfenError::InvalidPiecePlacement(format!(
                            "unexpected '{}' in row {}",
                            c,
                            i + 1
                        )));
                    }
                    file = file.saturating_add(n as u8);
                } else if c == '+' {
                    if promoted {
                        return Err(SfenError::InvalidPiecePlacement(format!(
                            "double '+' in row {}",
                            i + 1
                        )));
                    }
                    promoted = true;
                    continue;
                } else {
                    let (kind, owner) = PieceKind::from_sfen_char(c).ok_or_else(|| {
                        SfenError::InvalidPiecePlacement(format!(
                            "invalid character '{}' in row {}",
                            c,
                            i + 1
                        ))
                    })?;
                    let kind = if promoted {
                        kind.promoted().ok_or_else(|| {
                            SfenError::InvalidPiecePlacement(format!(
                                "'{}' cannot be promoted",
                                c
                            ))
                        })?
                    } else {
                        kind
                    };
                    if file >= Square::FILES {
                        return Err(SfenError::InvalidPiecePlacement(format!(
                            "row {} is too long",
                            i + 1
                        )));
                    }
                    layout.set(Square::new(file, rank), Some((owner, kind)));
                    file += 1;
                }
                promoted = false;
            }
            if promoted || file != Square::FILES {
                return Err(SfenError::InvalidPiecePlacement(format!(
                    "row {} has {} squares, expected {}",
                    i + 1,
                    file,
                    Square::FILES
                )));
            }
        }
        Ok(layout)
    }

    fn parse_hands(hands: &str) -> Result<[HandCounts; 2], SfenError> {
        let mut result = [HandCounts::new(), HandCounts::new()];
        if hands == "-" {
            return Ok(result);
        }

        let mut count: Option<u32> = None;
        for c in hands.chars() {
            if let Some(d) = c.to_digit(10) {
                let n = count
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(d))
                    .ok_or_else(|| SfenError::InvalidHand("count out of range".to_string()))?;
                count = Some(n);
                continue;
            }
            let (kind, owner) = PieceKind::from_sfen_char(c)
                .filter(|(kind, _)| kind.is_hand_kind())
                .ok_or_else(|| SfenError::InvalidHand(format!("invalid character '{}'", c)))?;
            let n = count.take().unwrap_or(1);
            if n == 0 {
                return Err(SfenError::InvalidHand(format!("zero count for '{}'", c)));
            }
            let held = result.iter().filter_map(|hand| hand.get(&kind)).sum::<u32>();
            if n > kind.set_count() - held {
                return Err(SfenError::InvalidHand(format!(
                    "more than {} '{}' in hands",
                    kind.set_count(),
                    c
                )));
            }
            *result[owner.index()].entry(kind).or_insert(0) += n;
        }
        if count.is_some() {
            return Err(SfenError::InvalidHand("trailing count".to_string()));
        }
        Ok(result)
    }
}

impl fmt::Display for Sfen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..Square::RANKS).rev() {
            let mut empty = 0;
            for file in 0..Square::FILES {
                match self.layout.get(Square::new(file, rank)) {
                    Some((owner, kind)) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        if kind.is_promoted() {
                            write!(f, "+")?;
                        }
                        write!(f, "{}", kind.to_sfen_char(owner))?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} ", self.side_to_move.to_sfen_char())?;

        let mut any = false;
        for owner in Player::ALL {
            for kind in PieceKind::HAND_KINDS {
                let n = self.hands[owner.index()].get(&kind).copied().unwrap_or(0);
                if n == 0 {
                    continue;
                }
                if n > 1 {
                    write!(f, "{}", n)?;
                }
                write!(f, "{}", kind.to_sfen_char(owner))?;
                any = true;
            }
        }
        if !any {
            write!(f, "-")?;
        }

        write!(f, " {}", self.move_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_matches_initial_layout() {
        let sfen = Sfen::parse(Sfen::STARTPOS).unwrap();
        assert_eq!(sfen.layout, BoardLayout::initial());
        assert_eq!(sfen.side_to_move, Player::First);
        assert!(sfen.hands[0].is_empty() && sfen.hands[1].is_empty());
        assert_eq!(sfen.move_number, 1);
    }

    #[test]
    fn startpos_roundtrip() {
        let sfen = Sfen::parse(Sfen::STARTPOS).unwrap();
        assert_eq!(sfen.to_string(), Sfen::STARTPOS);
    }

    #[test]
    fn promoted_pieces_and_hands() {
        let text = "4k4/9/4+P4/9/9/9/9/9/4K4 w 2Pb 10";
        let sfen = Sfen::parse(text).unwrap();
        assert_eq!(
            sfen.layout.get(Square::new(4, 6)),
            Some((Player::First, PieceKind::Tokin))
        );
        assert_eq!(sfen.hands[0].get(&PieceKind::Pawn), Some(&2));
        assert_eq!(sfen.hands[1].get(&PieceKind::Bishop), Some(&1));
        assert_eq!(sfen.side_to_move, Player::Second);
        assert_eq!(sfen.to_string(), text);
    }

    #[test]
    fn invalid_part_count() {
        assert_eq!(
            Sfen::parse("9/9/9/9/9/9/9/9/9 b -"),
            Err(SfenError::InvalidPartCount(3))
        );
    }

    #[test]
    fn invalid_placement() {
        assert!(matches!(
            Sfen::parse("9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Sfen::parse("8/9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Sfen::parse("+g8/9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Sfen::parse("x8/9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_side_and_hand() {
        assert_eq!(
            Sfen::parse("9/9/9/9/9/9/9/9/9 x - 1"),
            Err(SfenError::InvalidSideToMove("x".to_string()))
        );
        assert!(matches!(
            Sfen::parse("9/9/9/9/9/9/9/9/9 b K 1"),
            Err(SfenError::InvalidHand(_))
        ));
        assert!(matches!(
            Sfen::parse("9/9/9/9/9/9/9/9/9 b 2 1"),
            Err(SfenError::InvalidHand(_))
        ));
        assert_eq!(
            Sfen::parse("9/9/9/9/9/9/9/9/9 b - x"),
            Err(SfenError::InvalidMoveNumber("x".to_string()))
        );
    }

    #[test]
    fn hand_counts_are_bounded() {
        let parsed = Sfen::parse("9/9/9/9/9/9/9/9/9 b 10P8p2R4g 1").unwrap();
        assert_eq!(parsed.hands[0].get(&PieceKind::Pawn), Some(&10));
        assert_eq!(parsed.hands[1].get(&PieceKind::Pawn), Some(&8));

        for hands in ["99999999999P", "70000P", "4000000000P", "19P", "10P9p", "3B", "Bb2B", "5G"] {
            let sfen = format!("9/9/9/9/9/9/9/9/9 b {} 1", hands);
            assert!(
                matches!(Sfen::parse(&sfen), Err(SfenError::InvalidHand(_))),
                "{} should be rejected",
                hands
            );
        }
    }
}
