//! 評価値（Value）
//!
//! 駒割りの尺度は歩 = 90。`Value::INFINITE` は玉を取る手の評価値として予約しており、
//! 駒割りの合計がこの値に届くことはない。

/// 評価値（手番側から見た値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 無限大（玉を取る手の評価値）
    pub const INFINITE: Value = Value(1_000_000);

    /// 歩の内部評価値
    ///
    /// USI `score cp` 出力時に `100 * value / PAWN_VALUE` で正規化するために使用。
    pub const PAWN_VALUE: i32 = 90;

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 玉を取る（取られる）ことが確定した値か
    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.0 >= Self::INFINITE.0 || self.0 <= -Self::INFINITE.0
    }

    /// 内部値をUSI centipawn値に変換
    #[inline]
    pub const fn to_cp(self) -> i32 {
        (self.0 as i64 * 100 / Self::PAWN_VALUE as i64) as i32
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
