use std::error::Error;
use std::fmt::{Debug, Display};
use std::ops::Range;
use std::str::CharIndices;

use fen_common::{File, Location, Rank};
use log::{debug, trace};

use crate::{placement_field, PieceLocations, SquareToken};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FenErrKind {
    EmptyField,
    UnexpectedChar(char),
    TooManySquares { rank: Rank },
    NotEnoughSquares { rank: Rank, found: u8 },
    TooManyRanks,
    NotEnoughRanks { found: u8 },
}

impl Display for FenErrKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField => write!(f, "the piece-placement field is empty"),
            Self::UnexpectedChar(ch) => write!(
                f,
                "unexpected character {:?}, expected one of KQRBNP, kqrbnp, 1-8 or '/'",
                ch
            ),
            Self::TooManySquares { rank } => {
                write!(f, "rank {} describes more than 8 squares", rank.as_char())
            }
            Self::NotEnoughSquares { rank, found } => write!(
                f,
                "rank {} describes {} squares, expected 8",
                rank.as_char(),
                found
            ),
            Self::TooManyRanks => write!(f, "the field describes more than 8 ranks"),
            Self::NotEnoughRanks { found } => {
                write!(f, "the field describes {} ranks, expected 8", found)
            }
        }
    }
}

/// A malformed piece-placement field. The span is a byte range into the text
/// that was parsed; errors found at the end of the field have an empty span.
#[derive(Clone, PartialEq, Eq)]
pub struct FenErr {
    kind: FenErrKind,
    span: Range<usize>,
}

impl FenErr {
    pub(crate) fn new(kind: FenErrKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    pub fn kind(&self) -> &FenErrKind {
        &self.kind
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn byte_index(&self) -> usize {
        self.span.start
    }
}

impl Debug for FenErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Just defer to the Display impl
        write!(f, "{}", self)
    }
}

impl Display for FenErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid FEN field: {} (byte {}, 0-indexed)",
            self.kind, self.span.start
        )
    }
}

impl Error for FenErr {}

/// Single forward pass over a piece-placement field. Square counts are checked
/// per rank as tokens arrive, so no board is produced from a malformed field.
pub(crate) struct FenParser<'fen> {
    chars: CharIndices<'fen>,
    end_index: usize,
}

impl<'fen> FenParser<'fen> {
    pub(crate) fn parse_fen(input: &'fen str) -> Result<PieceLocations, FenErr> {
        // The field is a prefix of the input, so byte offsets carry over unchanged.
        Self::parse_placement(placement_field(input))
    }

    pub(crate) fn parse_placement(field: &'fen str) -> Result<PieceLocations, FenErr> {
        let mut parser = Self {
            chars: field.char_indices(),
            end_index: field.len(),
        };

        let result = parser.parse_piece_placement();
        match &result {
            Ok(_) => debug!("parsed piece placement {:?}", field),
            Err(err) => debug!("rejected piece placement {:?}: {}", field, err),
        }
        result
    }

    fn parse_piece_placement(&mut self) -> Result<PieceLocations, FenErr> {
        if self.end_index == 0 {
            return Err(FenErr::new(FenErrKind::EmptyField, 0..0));
        }

        let mut result = PieceLocations::default();
        let mut rank = Rank::Eight;
        let mut squares = 0_u8;

        while let Some((index, ch)) = self.chars.next() {
            let token = SquareToken::classify(index, ch)?;
            trace!("{:?} at byte {} on rank {}", token, index, rank.as_char());

            let span = index..index + ch.len_utf8();
            match token {
                SquareToken::RankSeparator => {
                    if squares != 8 {
                        return Err(FenErr::new(
                            FenErrKind::NotEnoughSquares {
                                rank,
                                found: squares,
                            },
                            span,
                        ));
                    }

                    rank = match rank.next_lower() {
                        None => return Err(FenErr::new(FenErrKind::TooManyRanks, span)),
                        Some(lower) => lower,
                    };
                    squares = 0;
                }
                SquareToken::Empty(_) | SquareToken::Occupied(_) => {
                    if squares + token.width() > 8 {
                        return Err(FenErr::new(FenErrKind::TooManySquares { rank }, span));
                    }

                    if let SquareToken::Occupied(piece) = token {
                        let file = match File::all_files_ascending().nth(squares as usize) {
                            None => {
                                return Err(FenErr::new(FenErrKind::TooManySquares { rank }, span))
                            }
                            Some(file) => file,
                        };
                        result[&Location::new(file, rank)] = Some(piece);
                    }
                    squares += token.width();
                }
            }
        }

        let end = self.end_index..self.end_index;
        if squares != 8 {
            return Err(FenErr::new(
                FenErrKind::NotEnoughSquares {
                    rank,
                    found: squares,
                },
                end,
            ));
        }

        if rank != Rank::One {
            return Err(FenErr::new(
                FenErrKind::NotEnoughRanks {
                    found: 8 - rank.as_index() as u8,
                },
                end,
            ));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use fen_common::{File, Location, Piece, PieceKind, Player, Rank};

    use crate::{parse_fen, parse_placement, FenErrKind};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn parses_default_board_state() {
        let input_fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let layout = parse_fen(input_fen).unwrap();

        // Rooks
        assert!(
            layout[&Location::new(File::a, Rank::One)]
                == Some(Piece::new(Player::White, PieceKind::Rook))
        );
        assert!(
            layout[&Location::new(File::h, Rank::Eight)]
                == Some(Piece::new(Player::Black, PieceKind::Rook))
        );

        // Queens and kings
        assert!(
            layout[&Location::new(File::d, Rank::One)]
                == Some(Piece::new(Player::White, PieceKind::Queen))
        );
        assert!(
            layout[&Location::new(File::e, Rank::Eight)]
                == Some(Piece::new(Player::Black, PieceKind::King))
        );

        // Pawns
        for file in File::all_files_ascending() {
            assert!(layout[&Location::new(file, Rank::Two)] == Some(Piece::WHITE_PAWN));
            assert!(layout[&Location::new(file, Rank::Seven)] == Some(Piece::BLACK_PAWN));
        }

        // empties
        for file in File::all_files_ascending() {
            for rank in [Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
                assert!(layout[&Location::new(file, rank)].is_none());
            }
        }

        assert_eq!(layout.occupied().count(), 32);
        assert_eq!(layout.to_string(), START);
    }

    #[test]
    fn ignores_trailing_fields() {
        let with_fields =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        let bare = parse_placement("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
        assert_eq!(with_fields.unwrap(), bare.unwrap());
    }

    #[test]
    fn accepts_unusual_but_well_formed_digit_runs() {
        let layout = parse_placement("44/8/8/8/8/8/8/1111k2K").unwrap();
        assert_eq!(layout.to_string(), "8/8/8/8/8/8/8/4k2K");
    }

    #[test]
    fn canonical_output_parses_back_to_the_same_board() {
        let layout =
            parse_placement("2kr1b1r/ppp5/1b3q2/3nN3/PP1Pp1Q1/2P1P2P/5PP1/2R1KR2").unwrap();
        assert_eq!(parse_placement(&layout.to_string()).unwrap(), layout);
    }

    #[test]
    fn rejects_unexpected_characters_with_their_position() {
        let err = parse_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::UnexpectedChar('x'));
        assert_eq!(err.span(), 13..14);

        let err = parse_fen("8/8/8/8/0/8/8/8").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::UnexpectedChar('0'));
        assert_eq!(err.byte_index(), 8);
    }

    #[test]
    fn rejects_overfull_ranks() {
        let err = parse_placement("8/8/8/4P4/8/8/8/8").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::TooManySquares { rank: Rank::Five });
        assert_eq!(err.byte_index(), 8);

        let err = parse_placement("rnbqkbnrp/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::TooManySquares { rank: Rank::Eight });
        assert_eq!(err.byte_index(), 8);
    }

    #[test]
    fn pieces_land_on_their_files_and_overflow_is_caught() {
        let layout = parse_placement("7k/8/8/8/8/8/8/K7").unwrap();
        assert_eq!(
            layout[&Location::new(File::h, Rank::Eight)],
            Some(Piece::new(Player::Black, PieceKind::King))
        );
        assert_eq!(
            layout[&Location::new(File::a, Rank::One)],
            Some(Piece::new(Player::White, PieceKind::King))
        );

        let err = parse_placement("8/8/8/8/8/8/8/7KQ").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::TooManySquares { rank: Rank::One });
        assert_eq!(err.span(), 16..17);
    }

    #[test]
    fn rejects_short_ranks() {
        let err = parse_placement("8/8/7/8/8/8/8/8").unwrap_err();
        assert_eq!(
            err.kind(),
            &FenErrKind::NotEnoughSquares {
                rank: Rank::Six,
                found: 7
            }
        );
        assert_eq!(err.byte_index(), 5);

        let err = parse_placement("8/8/8/8/8/8/8/3").unwrap_err();
        assert_eq!(
            err.kind(),
            &FenErrKind::NotEnoughSquares {
                rank: Rank::One,
                found: 3
            }
        );
        assert_eq!(err.span(), 15..15);
    }

    #[test]
    fn rejects_wrong_rank_counts() {
        let err = parse_placement("8/8/8/8/8/8/8/8/8").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::TooManyRanks);
        assert_eq!(err.byte_index(), 15);

        let err = parse_placement("8/8/8").unwrap_err();
        assert_eq!(err.kind(), &FenErrKind::NotEnoughRanks { found: 3 });
        assert_eq!(err.span(), 5..5);
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(parse_fen("").unwrap_err().kind(), &FenErrKind::EmptyField);
        assert_eq!(parse_fen(" w - - 0 1").unwrap_err().kind(), &FenErrKind::EmptyField);
    }

    #[test]
    fn error_message_names_the_problem_and_position() {
        let err = parse_placement("8/8/8/8/8/8/8/7?").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid FEN field: unexpected character '?', expected one of KQRBNP, kqrbnp, 1-8 or '/' (byte 15, 0-indexed)"
        );
    }
}
