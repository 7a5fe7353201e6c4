//! 探索のシナリオ

use std::cell::Cell;

use simple_shogi_core::eval::Evaluator;
use simple_shogi_core::search::Searcher;
use simple_shogi_core::{search, Color, Move, Position, Value};

#[test]
fn rook_takes_king_at_depth_one() {
    let mut pos = Position::from_sfen("4k4/9/9/9/9/9/9/4R4/K8 b - 1").unwrap();
    let result = search(&mut pos, 1);
    assert!(result.best_move.captures_king());
    assert_eq!(result.best_move.to_usi(), "5h5a+");
    assert_eq!(result.value, Value::INFINITE);
}

#[test]
fn wins_free_gold_at_depth_two() {
    // 金を取っても後手は取り返せない
    let mut pos = Position::from_sfen("k8/9/9/4g4/9/9/9/4R4/K8 b - 1").unwrap();
    let result = search(&mut pos, 2);
    assert_eq!(result.best_move.to_usi(), "5h5d");
    assert_eq!(result.value, Value::new(945 + 540));
}

/// 末端で呼ばれた回数を数える評価関数
struct CountingEvaluator {
    calls: Cell<u64>,
}

impl Evaluator for CountingEvaluator {
    fn evaluate(&self, _pos: &Position) -> Value {
        self.calls.set(self.calls.get() + 1);
        Value::ZERO
    }
}

#[test]
fn custom_evaluator_sees_every_leaf() {
    let mut pos = Position::startpos();
    let mut searcher = Searcher::new(CountingEvaluator { calls: Cell::new(0) });
    let result = searcher.search(&mut pos, 2);
    assert_eq!(result.nodes, 30 + 30 * 30);
    assert_eq!(result.best_move.to_usi(), "1g1f");
    assert_eq!(searcher.evaluator().calls.get(), 30 * 30);
    assert_eq!(pos, Position::startpos());
}

#[test]
fn search_runs_on_any_side() {
    let mut pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w - 1").unwrap();
    let result = search(&mut pos, 2);
    assert_ne!(result.best_move, Move::Resign);
    assert_eq!(result.best_move.side(), Some(Color::White));
}
