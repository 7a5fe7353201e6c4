//! 局面表現モジュール
//!
//! 将棋の局面を表現し、手の実行・巻き戻しを行う。
//!
//! - `Position`: 局面本体（盤面配列・手駒・手番・手数・玉の位置）
//! - `do_move` / `undo_move`: 手の実行と巻き戻し。探索は1つの `Position` を
//!   この対で進めて戻しながら再利用する
//! - `is_in_check`: 王手判定
//! - SFEN形式の解析・出力
//! - 盤面の表示（人間向けの盤面図・JSON）
//!
//! 盤面配列・手駒・玉の位置は `Position` のメソッドを通じてのみ更新され、
//! 常に互いに整合しているように保つ。

mod display;
mod pos;
mod sfen;

pub use pos::Position;
pub use sfen::{SfenError, SFEN_HIRATE};
