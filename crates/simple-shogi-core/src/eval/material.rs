//! 駒割りによる評価

use crate::position::Position;
use crate::types::{Color, Piece, PieceType, Value};

/// 駒種ごとの価値（先手の駒として）
pub const fn base_piece_value(pt: PieceType) -> i32 {
    match pt {
        PieceType::Pawn => 90,
        PieceType::Lance => 315,
        PieceType::Knight => 405,
        PieceType::Silver => 495,
        PieceType::Gold => 540,
        PieceType::Bishop => 855,
        PieceType::Rook => 945,
        PieceType::King => 15000,
        PieceType::ProPawn => 540,
        PieceType::ProLance => 540,
        PieceType::ProKnight => 540,
        PieceType::ProSilver => 540,
        PieceType::Horse => 945,
        PieceType::Dragon => 1395,
    }
}

#[inline]
fn color_sign(color: Color) -> i32 {
    match color {
        Color::Black => 1,
        Color::White => -1,
    }
}

/// 先手を正とした駒の価値
#[inline]
pub fn signed_piece_value(pc: Piece) -> i32 {
    if pc.is_none() {
        return 0;
    }
    color_sign(pc.color()) * base_piece_value(pc.piece_type())
}

/// 先手から見た駒割り（盤上と手駒の合計）
pub fn material_value(pos: &Position) -> Value {
    let board: i32 = pos.pieces().map(|(_, pc)| signed_piece_value(pc)).sum();

    let hands: i32 = Color::ALL
        .into_iter()
        .flat_map(|color| {
            pos.hand(color)
                .iter()
                .map(move |(pt, n)| color_sign(color) * base_piece_value(pt) * n as i32)
        })
        .sum();

    Value::new(board + hands)
}

/// 手番側から見た評価値
pub fn evaluate(pos: &Position) -> Value {
    let value = material_value(pos);
    match pos.side_to_move() {
        Color::Black => value,
        Color::White => -value,
    }
}
