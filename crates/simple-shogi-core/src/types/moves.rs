//! 指し手（Move）

use std::fmt;

use thiserror::Error;

use super::{Color, Piece, PieceType, Square};
use crate::position::Position;

/// 指し手
///
/// 盤上の移動と駒打ちに加えて、プロトコル上の合図（投了・勝ち宣言・null move）を
/// 別のバリアントとして持つ。合図の手は生成も探索もされない。
/// 手番は動かす駒の色から決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// 盤上の駒の移動
    Normal {
        from: Square,
        to: Square,
        /// 移動前の駒
        piece: Piece,
        /// 移動先にあった駒（なければ `Piece::NONE`）
        captured: Piece,
        promote: bool,
    },
    /// 手駒を打つ
    Drop { to: Square, piece: Piece },
    /// 投了
    Resign,
    /// 勝ち宣言
    Win,
    /// 何もしない手（"none"）
    Null,
}

/// USI形式の指し手文字列の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("malformed move token: {0:?}")]
    Malformed(String),

    #[error("invalid square in move token: {0:?}")]
    InvalidSquare(String),

    #[error("piece {0:?} cannot be dropped")]
    InvalidDropPiece(char),

    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("drop target {0} is occupied")]
    OccupiedDropTarget(Square),

    #[error("piece on {0} cannot promote")]
    CannotPromote(Square),
}

impl Move {
    /// 盤上の移動の指し手を生成
    #[inline]
    pub const fn normal(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Piece,
        promote: bool,
    ) -> Move {
        Move::Normal { from, to, piece, captured, promote }
    }

    /// 駒打ちの指し手を生成
    #[inline]
    pub const fn drop(to: Square, piece: Piece) -> Move {
        Move::Drop { to, piece }
    }

    /// 移動元（駒打ち・合図の手は None）
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            _ => None,
        }
    }

    /// 移動先（合図の手は None）
    #[inline]
    pub const fn to(self) -> Option<Square> {
        match self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => Some(to),
            _ => None,
        }
    }

    /// 動かす駒（移動前）。合図の手は `Piece::NONE`
    #[inline]
    pub const fn piece(self) -> Piece {
        match self {
            Move::Normal { piece, .. } | Move::Drop { piece, .. } => piece,
            _ => Piece::NONE,
        }
    }

    /// 取る駒。取らない手は `Piece::NONE`
    #[inline]
    pub const fn captured(self) -> Piece {
        match self {
            Move::Normal { captured, .. } => captured,
            _ => Piece::NONE,
        }
    }

    /// 指した側（合図の手は None）
    #[inline]
    pub const fn side(self) -> Option<Color> {
        match self {
            Move::Normal { piece, .. } | Move::Drop { piece, .. } => Some(piece.color()),
            _ => None,
        }
    }

    /// 駒打ちか
    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// 成る手か
    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Normal { promote: true, .. })
    }

    /// 駒を取る手か
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured().is_some()
    }

    /// 玉を取る手か
    #[inline]
    pub const fn captures_king(self) -> bool {
        self.captured().is_king()
    }

    /// USI形式の文字列に変換
    pub fn to_usi(self) -> String {
        match self {
            Move::Normal { from, to, promote, .. } => {
                format!("{from}{to}{}", if promote { "+" } else { "" })
            }
            Move::Drop { to, piece } => format!("{}*{to}", piece.piece_type().to_sfen_char()),
            Move::Resign => "resign".to_string(),
            Move::Win => "win".to_string(),
            Move::Null => "none".to_string(),
        }
    }

    /// USI形式の文字列から指し手を復元する
    ///
    /// 盤上の移動は `pos` から移動元・移動先の駒を読み取るので、生成された指し手と
    /// 比較できる。駒打ちの駒は英字の大文字・小文字によらず手番側の駒になる。
    pub fn from_usi(s: &str, pos: &Position) -> Result<Move, MoveParseError> {
        match s {
            "resign" => return Ok(Move::Resign),
            "win" => return Ok(Move::Win),
            "none" => return Ok(Move::Null),
            _ => {}
        }

        if !s.is_ascii() || !(s.len() == 4 || s.len() == 5) {
            return Err(MoveParseError::Malformed(s.to_string()));
        }

        let to = Square::from_usi(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;

        if &s[1..2] == "*" {
            if s.len() != 4 {
                return Err(MoveParseError::Malformed(s.to_string()));
            }
            let c = s.as_bytes()[0] as char;
            let pt = PieceType::from_sfen_char(c)
                .filter(|pt| pt.hand_index().is_some())
                .ok_or(MoveParseError::InvalidDropPiece(c))?;
            if pos.piece_on(to).is_some() {
                return Err(MoveParseError::OccupiedDropTarget(to));
            }
            return Ok(Move::drop(to, Piece::new(pos.side_to_move(), pt)));
        }

        let from = Square::from_usi(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;
        let promote = match s.len() {
            5 if &s[4..5] == "+" => true,
            5 => return Err(MoveParseError::Malformed(s.to_string())),
            _ => false,
        };
        let piece = pos.piece_on(from);
        if piece.is_none() {
            return Err(MoveParseError::EmptyOrigin(from));
        }
        if promote && piece.promote().is_none() {
            return Err(MoveParseError::CannotPromote(from));
        }
        Ok(Move::normal(from, to, piece, pos.piece_on(to), promote))
    }
}

impl fmt::Display for Move {
    /// 棋譜風の表示（例: "☗ ７六歩  "）
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (to, piece) = match *self {
            Move::Normal { to, piece, .. } | Move::Drop { to, piece } => (to, piece),
            special => return f.write_str(&special.to_usi()),
        };
        let suffix = if self.is_promotion() {
            "成"
        } else if self.is_drop() {
            "打"
        } else {
            "  "
        };
        write!(
            f,
            "{} {}{}{}{}",
            piece.color().mark(),
            to.file().to_zenkaku_char(),
            to.rank().to_kanji_char(),
            piece.piece_type().kanji(),
            suffix
        )
    }
}
