//! SFEN形式の解析・出力

use thiserror::Error;

use crate::types::{Color, File, Piece, PieceType, Rank, Square};

use super::pos::Position;

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// 手駒をSFENに書き出す順序
const HAND_SFEN_ORDER: [PieceType; PieceType::HAND_NUM] = [
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
    PieceType::Pawn,
];

/// SFENパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SfenError {
    /// フィールドが足りない
    #[error("SFEN must have 4 fields, got {0}")]
    MissingField(usize),

    /// 盤面の形式が不正
    #[error("invalid board: {0}")]
    Board(String),

    /// 手番の形式が不正
    #[error("invalid side to move: expected 'b' or 'w', got {0:?}")]
    SideToMove(String),

    /// 手駒の形式が不正
    #[error("invalid hand: {0}")]
    Hand(String),

    /// 手数の形式が不正
    #[error("invalid ply: {0:?}")]
    Ply(String),
}

impl Position {
    /// SFEN文字列から局面を生成
    pub fn from_sfen(sfen: &str) -> Result<Position, SfenError> {
        let parts: Vec<&str> = sfen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(SfenError::MissingField(parts.len()));
        }

        let mut pos = Position::new();

        // 1. 盤面
        parse_board(&mut pos, parts[0])?;

        // 2. 手番
        match parts[1] {
            "b" => pos.set_side_to_move(Color::Black),
            "w" => pos.set_side_to_move(Color::White),
            other => return Err(SfenError::SideToMove(other.to_string())),
        }

        // 3. 手駒
        parse_hand(&mut pos, parts[2])?;

        // 4. 手数
        pos.set_ply(parts[3].parse().map_err(|_| SfenError::Ply(parts[3].to_string()))?);

        Ok(pos)
    }

    /// SFEN文字列から局面を設定
    ///
    /// 解析に失敗した場合、局面は変更されない。
    pub fn set_sfen(&mut self, sfen: &str) -> Result<(), SfenError> {
        *self = Position::from_sfen(sfen)?;
        Ok(())
    }

    /// 平手初期局面を設定
    pub fn set_hirate(&mut self) {
        *self = Position::startpos();
    }

    /// 現局面のSFEN文字列を取得
    pub fn to_sfen(&self) -> String {
        let mut result = String::new();

        // 1. 盤面（1段目から、各段は9筋から1筋へ）
        for rank in Rank::ALL {
            let mut empty_count = 0;

            for file in File::ALL.iter().rev() {
                let pc = self.piece_on(Square::new(*file, rank));
                if pc.is_none() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    result.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                result.push_str(&pc.to_sfen());
            }

            if empty_count > 0 {
                result.push_str(&empty_count.to_string());
            }
            if rank != Rank::Rank9 {
                result.push('/');
            }
        }

        // 2. 手番
        result.push(' ');
        result.push(self.side_to_move().to_sfen_char());

        // 3. 手駒
        result.push(' ');
        let hand_str = self.hand_to_sfen();
        if hand_str.is_empty() {
            result.push('-');
        } else {
            result.push_str(&hand_str);
        }

        // 4. 手数
        result.push(' ');
        result.push_str(&self.ply().to_string());

        result
    }

    /// 手駒をSFEN文字列に変換（先手の大文字の後に後手の小文字）
    fn hand_to_sfen(&self) -> String {
        let mut result = String::new();
        for color in Color::ALL {
            let hand = self.hand(color);
            for pt in HAND_SFEN_ORDER {
                let cnt = hand.count(pt);
                if cnt == 0 {
                    continue;
                }
                if cnt > 1 {
                    result.push_str(&cnt.to_string());
                }
                result.push_str(&Piece::new(color, pt).to_sfen());
            }
        }
        result
    }
}

/// 盤面部分をパース
fn parse_board(pos: &mut Position, board_str: &str) -> Result<(), SfenError> {
    let ranks: Vec<&str> = board_str.split('/').collect();
    if ranks.len() != Rank::NUM {
        return Err(SfenError::Board(format!("expected 9 ranks, got {}", ranks.len())));
    }

    for (rank, rank_str) in Rank::ALL.into_iter().zip(ranks) {
        // 9筋から開始
        let mut file_idx = 8i32;
        let mut promoted = false;

        for c in rank_str.chars() {
            if c == '+' {
                if promoted {
                    return Err(SfenError::Board(format!("repeated '+' in rank {rank_str:?}")));
                }
                promoted = true;
                continue;
            }

            if let Some(digit) = c.to_digit(10) {
                if promoted || digit == 0 {
                    return Err(SfenError::Board(format!("unexpected {c:?} in rank {rank_str:?}")));
                }
                file_idx -= digit as i32;
                if file_idx < -1 {
                    return Err(SfenError::Board(format!("too many squares in rank {rank_str:?}")));
                }
                continue;
            }

            if file_idx < 0 {
                return Err(SfenError::Board(format!("too many pieces in rank {rank_str:?}")));
            }
            let sq = Square::from_coords(file_idx, rank as i32)
                .ok_or_else(|| SfenError::Board(format!("square out of range in {rank_str:?}")))?;

            let pc = sfen_char_to_piece(c, promoted)?;
            if pc.is_king() && pos.king_square(pc.color()).is_some() {
                return Err(SfenError::Board(format!("more than one {:?} king", pc.color())));
            }
            pos.put_piece(sq, pc);

            promoted = false;
            file_idx -= 1;
        }

        if promoted || file_idx != -1 {
            return Err(SfenError::Board(format!("rank {rank_str:?} has wrong number of squares")));
        }
    }

    Ok(())
}

/// 手駒部分をパース
///
/// 枚数は駒文字の前の10進数（省略時は1）。同じ駒が複数回現れた場合は後の指定で上書きする。
fn parse_hand(pos: &mut Position, hand_str: &str) -> Result<(), SfenError> {
    if hand_str == "-" {
        return Ok(());
    }

    let mut count = 0u32;
    let mut has_count = false;
    for c in hand_str.chars() {
        if let Some(digit) = c.to_digit(10) {
            count = count
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit))
                .ok_or_else(|| SfenError::Hand(format!("count overflow in {hand_str:?}")))?;
            has_count = true;
            continue;
        }

        let pc = Piece::from_sfen_char(c)
            .filter(|pc| pc.piece_type().hand_index().is_some())
            .ok_or_else(|| SfenError::Hand(format!("unknown hand piece {c:?}")))?;
        let n = count.max(1);
        if n > hand_max(pc.piece_type()) {
            return Err(SfenError::Hand(format!("too many {c:?} in hand: {n}")));
        }
        pos.set_hand_count(pc.color(), pc.piece_type(), n);
        count = 0;
        has_count = false;
    }

    if has_count {
        return Err(SfenError::Hand(format!("trailing count in {hand_str:?}")));
    }
    Ok(())
}

/// 駒の総数（手駒として持てる上限）
const fn hand_max(pt: PieceType) -> u32 {
    match pt {
        PieceType::Pawn => 18,
        PieceType::Lance | PieceType::Knight | PieceType::Silver | PieceType::Gold => 4,
        PieceType::Bishop | PieceType::Rook => 2,
        _ => 0,
    }
}

/// SFEN文字を駒に変換
fn sfen_char_to_piece(c: char, promoted: bool) -> Result<Piece, SfenError> {
    let pc = Piece::from_sfen_char(c)
        .ok_or_else(|| SfenError::Board(format!("unknown piece {c:?}")))?;
    if !promoted {
        return Ok(pc);
    }
    pc.promote().ok_or_else(|| SfenError::Board(format!("cannot promote {c:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hirate() {
        let mut pos = Position::new();
        pos.set_hirate();

        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.ply(), 1);

        // 先手の駒配置チェック
        assert_eq!(pos.piece_on(Square::new(File::File9, Rank::Rank9)), Piece::B_LANCE);
        assert_eq!(pos.piece_on(Square::new(File::File5, Rank::Rank9)), Piece::B_KING);
        assert_eq!(pos.piece_on(Square::new(File::File7, Rank::Rank7)), Piece::B_PAWN);
        assert_eq!(pos.piece_on(Square::new(File::File8, Rank::Rank8)), Piece::B_BISHOP);
        assert_eq!(pos.piece_on(Square::new(File::File2, Rank::Rank8)), Piece::B_ROOK);

        // 後手の駒配置チェック
        assert_eq!(pos.piece_on(Square::new(File::File9, Rank::Rank1)), Piece::W_LANCE);
        assert_eq!(pos.piece_on(Square::new(File::File5, Rank::Rank1)), Piece::W_KING);
        assert_eq!(pos.piece_on(Square::new(File::File8, Rank::Rank2)), Piece::W_ROOK);
        assert_eq!(pos.piece_on(Square::new(File::File2, Rank::Rank2)), Piece::W_BISHOP);
    }

    #[test]
    fn test_hirate_roundtrip() {
        assert_eq!(Position::startpos().to_sfen(), SFEN_HIRATE);
    }

    #[test]
    fn test_sfen_with_hands_and_promoted() {
        let sfen =
            "ln1g3nl/1r3kg2/p2pppsp1/2ps2p1p/1p7/2P1P1P2/PPSP1P2P/2G1K2R1/LN3GSNL w B2Pbp 24";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.ply(), 24);
        assert_eq!(pos.hand(Color::Black).count(PieceType::Bishop), 1);
        assert_eq!(pos.hand(Color::Black).count(PieceType::Pawn), 2);
        assert_eq!(pos.hand(Color::White).count(PieceType::Bishop), 1);
        assert_eq!(pos.hand(Color::White).count(PieceType::Pawn), 1);
        assert_eq!(pos.to_sfen(), sfen);

        let sfen = "4k4/9/4+P4/9/9/9/9/9/+r3K3+B b - 3";
        let pos = Position::from_sfen(sfen).unwrap();
        assert_eq!(pos.piece_on(Square::new(File::File5, Rank::Rank3)), Piece::B_PRO_PAWN);
        assert_eq!(pos.piece_on(Square::new(File::File9, Rank::Rank9)), Piece::W_DRAGON);
        assert_eq!(pos.piece_on(Square::new(File::File1, Rank::Rank9)), Piece::B_HORSE);
        assert_eq!(pos.to_sfen(), sfen);
    }

    #[test]
    fn test_hand_order_is_normalized() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b p2PRl 1").unwrap();
        assert_eq!(pos.to_sfen(), "4k4/9/9/9/9/9/9/9/4K4 b R2Plp 1");
    }

    #[test]
    fn test_hand_large_count() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 18P 1").unwrap();
        assert_eq!(pos.hand(Color::Black).count(PieceType::Pawn), 18);
    }

    #[test]
    fn test_ply_is_required() {
        assert_eq!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w -"),
            Err(SfenError::MissingField(3))
        );
    }

    #[test]
    fn test_hand_count_exceeds_piece_supply() {
        for hand in ["19P", "5L", "5n", "5S", "5g", "3B", "3r", "1100R", "30000000P"] {
            let sfen = format!("4k4/9/9/9/9/9/9/9/4K4 b {hand} 1");
            assert!(
                matches!(Position::from_sfen(&sfen), Err(SfenError::Hand(_))),
                "{hand} should be rejected"
            );
        }
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2R2B4G4S4N4L18P 1").unwrap();
        assert_eq!(pos.hand(Color::Black).count(PieceType::Rook), 2);
        assert_eq!(pos.hand(Color::Black).count(PieceType::Lance), 4);
    }

    #[test]
    fn test_invalid_sfen() {
        assert_eq!(Position::from_sfen("9/9/9 b"), Err(SfenError::MissingField(2)));
        assert!(matches!(
            Position::from_sfen("9/9/9/9/9/9/9/9 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k5/9/9/9/9/9/9/9/4K4 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k3/9/9/9/9/9/9/9/4K4 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4x4/9/9/9/9/9/9/9/4K4 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4+k4/9/9/9/9/9/9/9/4K4 b - 1"),
            Err(SfenError::Board(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 x - 1"),
            Err(SfenError::SideToMove(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b K 1"),
            Err(SfenError::Hand(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b 2 1"),
            Err(SfenError::Hand(_))
        ));
        assert!(matches!(
            Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - x"),
            Err(SfenError::Ply(_))
        ));
    }

    #[test]
    fn test_set_sfen_failure_keeps_position() {
        let mut pos = Position::startpos();
        let before = pos.clone();
        assert!(pos.set_sfen("garbage").is_err());
        assert_eq!(pos, before);

        pos.set_sfen("4k4/9/9/9/9/9/9/9/4K4 w - 5").unwrap();
        assert_eq!(pos.ply(), 5);
    }
}
