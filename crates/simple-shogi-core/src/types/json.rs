//! 局面のJSON表現（デバッグ出力・外部ツール向け）

use serde::{Deserialize, Serialize};

use super::{Color, Hand, Piece, PieceType};

/// 駒のJSON表現
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "sente" | "gote"
    pub owner: String,
    /// "K" | "R" | "B" | "G" | "S" | "N" | "L" | "P"
    #[serde(rename = "type")]
    pub piece_type: String,
    /// 成駒かどうか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
}

/// 盤面の1マス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    /// "1a" ~ "9i" 形式
    pub square: String,
    /// 駒（存在しない場合はnull）
    pub piece: Option<PieceJson>,
}

/// 持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HandJson {
    #[serde(rename = "P", skip_serializing_if = "Option::is_none")]
    pub pawn: Option<u32>,
    #[serde(rename = "L", skip_serializing_if = "Option::is_none")]
    pub lance: Option<u32>,
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub knight: Option<u32>,
    #[serde(rename = "S", skip_serializing_if = "Option::is_none")]
    pub silver: Option<u32>,
    #[serde(rename = "G", skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(rename = "B", skip_serializing_if = "Option::is_none")]
    pub bishop: Option<u32>,
    #[serde(rename = "R", skip_serializing_if = "Option::is_none")]
    pub rook: Option<u32>,
}

/// 両者の持ち駒
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandsJson {
    pub sente: HandJson,
    pub gote: HandJson,
}

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardStateJson {
    /// 9x9のセル配列 `cells[段][筋]`（どちらも0が1段目・1筋）
    pub cells: Vec<Vec<CellJson>>,
    /// 持ち駒
    pub hands: HandsJson,
    /// 手番: "sente" | "gote"
    pub turn: String,
    /// 手数
    pub ply: i32,
}

/// 手番の名前
pub fn owner_name(color: Color) -> &'static str {
    match color {
        Color::Black => "sente",
        Color::White => "gote",
    }
}

impl PieceJson {
    /// 盤上の駒から生成。駒なしなら None
    pub fn from_piece(piece: Piece) -> Option<PieceJson> {
        if piece.is_none() {
            return None;
        }
        let pt = piece.piece_type();
        Some(PieceJson {
            owner: owner_name(piece.color()).to_string(),
            piece_type: pt.to_sfen_char().to_string(),
            promoted: pt.is_promoted().then_some(true),
        })
    }
}

impl From<Hand> for HandJson {
    fn from(hand: Hand) -> HandJson {
        let count = |pt: PieceType| Some(hand.count(pt)).filter(|&n| n > 0);
        HandJson {
            pawn: count(PieceType::Pawn),
            lance: count(PieceType::Lance),
            knight: count(PieceType::Knight),
            silver: count(PieceType::Silver),
            gold: count(PieceType::Gold),
            bishop: count(PieceType::Bishop),
            rook: count(PieceType::Rook),
        }
    }
}
