//! 評価関数

pub mod material;

use crate::position::Position;
use crate::types::Value;

pub use material::evaluate;

/// 局面評価のインターフェース
///
/// 返す値は手番側から見た評価値（正なら手番側が有利）。
pub trait Evaluator {
    fn evaluate(&self, pos: &Position) -> Value;
}

/// 駒割りのみの評価
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    #[inline]
    fn evaluate(&self, pos: &Position) -> Value {
        material::evaluate(pos)
    }
}
