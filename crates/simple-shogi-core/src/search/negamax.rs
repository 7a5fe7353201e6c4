//! 固定深さ negamax 探索

use log::{debug, trace};

use crate::eval::{Evaluator, MaterialEvaluator};
use crate::movegen::generate;
use crate::position::Position;
use crate::types::{Move, Value};

/// 探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最善手
    ///
    /// 深さ0では `Move::Null`。指せる手がない、またはどの手も玉を取られる場合は `Move::Resign`。
    pub best_move: Move,
    /// 手番側から見た評価値
    pub value: Value,
    /// 探索したノード数（子局面へ進んだ回数）
    pub nodes: u64,
}

/// 探索器
///
/// 1つの `Position` を `do_move` / `undo_move` で進めて戻しながら再帰する。
/// 疑似合法手をそのまま探索し、自玉を取られる手は相手の玉取りで評価が決まる。
pub struct Searcher<E: Evaluator> {
    evaluator: E,
    nodes: u64,
}

impl Default for Searcher<MaterialEvaluator> {
    fn default() -> Self {
        Searcher::new(MaterialEvaluator)
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Searcher { evaluator, nodes: 0 }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// 局面を固定深さで探索する
    ///
    /// 探索後の局面は呼び出し前と同一。
    pub fn search(&mut self, pos: &mut Position, depth: u32) -> SearchResult {
        self.nodes = 0;
        let (best_move, value) = self.negamax(pos, depth, 0);

        debug!(
            "search depth={depth} nodes={} bestmove={} value={value}",
            self.nodes,
            best_move.to_usi()
        );

        SearchResult {
            best_move,
            value,
            nodes: self.nodes,
        }
    }

    fn negamax(&mut self, pos: &mut Position, depth: u32, ply: u32) -> (Move, Value) {
        if depth == 0 {
            return (Move::Null, self.evaluator.evaluate(pos));
        }

        let mut best_value = -Value::INFINITE;
        let mut best_move = Move::Resign;

        // 生成器は局面を借用するので、子局面へ進む前にすべて取り出しておく
        let moves: Vec<Move> = generate(pos).collect();

        for mv in moves {
            if mv.captures_king() {
                // 玉を取る手があればそれで決まり
                return (mv, Value::INFINITE);
            }

            self.nodes += 1;
            pos.do_move(mv);
            let (_, child_value) = self.negamax(pos, depth - 1, ply + 1);
            pos.undo_move(mv);

            let value = -child_value;
            if ply == 0 {
                trace!("root move {} value={value}", mv.to_usi());
            }

            if best_value < value {
                best_value = value;
                best_move = mv;
            }
        }

        (best_move, best_value)
    }
}

/// 駒割り評価で局面を固定深さ探索する
pub fn search(pos: &mut Position, depth: u32) -> SearchResult {
    Searcher::default().search(pos, depth)
}
