//! 指し手生成
//!
//! 手番側の疑似合法手（自玉への王手放置を除外しない手）を決まった順序で生成する。
//!
//! 1. 駒を取る盤上の手（走査順に見つけ次第。成りが先）
//! 2. 駒を取らない成る手（走査順）
//! 3. 駒を取らない成らない手（走査順）
//! 4. 駒打ち（歩〜飛の順、各駒について空き升を走査順）
//!
//! 走査順は筋が外側（1筋→9筋）、段が内側（1段→9段）。

mod generator;
mod movelist;


pub use generator::{generate, generate_legal, MoveGenerator};
pub use movelist::{MoveList, MAX_MOVES};
