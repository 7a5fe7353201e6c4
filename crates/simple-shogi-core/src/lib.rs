//! # simple-shogi-core
//!
//! 最小構成の将棋エンジンコアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Move, Value, etc.）
//! - `position`: 局面表現とdo_move/undo_move、王手判定、SFEN
//! - `movegen`: 疑似合法手生成
//! - `eval`: 駒割り評価
//! - `search`: 固定深さ negamax 探索
//!

pub mod types;

pub mod position;

pub mod movegen;

pub mod eval;

pub mod search;

pub use position::{Position, SfenError, SFEN_HIRATE};
pub use search::{search, SearchResult};
pub use types::{Color, Move, MoveParseError, Piece, PieceType, Square, Value};
