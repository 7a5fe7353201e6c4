//! 指し手生成器

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::position::Position;
use crate::types::{Color, Move, Piece, PieceType, Square};

use super::movelist::MoveList;

/// 生成の段階
#[derive(Debug)]
enum Stage {
    /// 盤上の駒を走査中（次に調べる移動元の升のインデックス）
    Board { next_from: usize },
    /// 駒を取らない成る手を返す
    QuietPromotions(std::vec::IntoIter<Move>),
    /// 駒を取らない成らない手を返す
    QuietMoves(std::vec::IntoIter<Move>),
    /// 駒打ち（手駒の種類と打つ先の升のインデックス）
    Drops { hand_idx: usize, next_to: usize },
    Done,
}

/// 疑似合法手を遅延生成するイテレータ
///
/// 盤上の駒は移動元1升ずつ調べる。駒を取る手はその升の分をすぐに返し、
/// 取らない手は盤面の走査が終わるまで溜めておく。
/// 生成中に局面は変更できない（`&Position` を借用する）。
#[derive(Debug)]
pub struct MoveGenerator<'a> {
    pos: &'a Position,
    us: Color,
    stage: Stage,
    /// 直前に調べた移動元からの駒を取る手
    captures: VecDeque<Move>,
    quiet_promotions: Vec<Move>,
    quiet_moves: Vec<Move>,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(pos: &'a Position) -> Self {
        MoveGenerator {
            pos,
            us: pos.side_to_move(),
            stage: Stage::Board { next_from: 0 },
            captures: VecDeque::new(),
            quiet_promotions: Vec::new(),
            quiet_moves: Vec::new(),
        }
    }

    /// 1つの移動元から動ける手を調べる
    fn scan_from(&mut self, from: Square) {
        let us = self.us;
        let piece = self.pos.piece_on(from);
        if piece.is_none() || piece.color() != us {
            return;
        }

        for &md in piece.move_directions() {
            for to in from.ray(md) {
                let target = self.pos.piece_on(to);
                if target.is_some() && target.color() == us {
                    // 自分の駒があるのでここで止まる
                    break;
                }

                // 成る指し手
                if piece.can_promote()
                    && (to.rank().can_promote(us) || from.rank().can_promote(us))
                {
                    let mv = Move::normal(from, to, piece, target, true);
                    if target.is_some() {
                        self.captures.push_back(mv);
                    } else {
                        self.quiet_promotions.push(mv);
                    }
                }

                // 成らない指し手
                if piece.can_put_without_promotion(to.rank()) {
                    let mv = Move::normal(from, to, piece, target, false);
                    if target.is_some() {
                        self.captures.push_back(mv);
                    } else {
                        self.quiet_moves.push(mv);
                    }
                }

                if target.is_some() {
                    // 相手の駒があるのでここで利きが止まる
                    break;
                }
            }
        }
    }

    /// 次の駒打ちの手
    fn next_drop(&mut self, hand_idx: usize, next_to: usize) -> Option<Move> {
        let hand = self.pos.hand(self.us);
        let (mut hand_idx, mut next_to) = (hand_idx, next_to);

        while let Some(&pt) = PieceType::HAND_PIECES.get(hand_idx) {
            if !hand.has(pt) || next_to >= Square::NUM {
                hand_idx += 1;
                next_to = 0;
                continue;
            }

            let piece = Piece::new(self.us, pt);
            let candidates = Square::all().skip(next_to);
            for to in candidates {
                next_to = to.index() + 1;
                if self.pos.piece_on(to).is_some() || !piece.can_put_without_promotion(to.rank()) {
                    continue;
                }
                if pt == PieceType::Pawn && self.pos.has_pawn_on_file(self.us, to.file()) {
                    // 二歩
                    continue;
                }
                self.stage = Stage::Drops { hand_idx, next_to };
                return Some(Move::drop(to, piece));
            }
        }

        self.stage = Stage::Done;
        None
    }
}

impl Iterator for MoveGenerator<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            match &mut self.stage {
                Stage::Board { next_from } => {
                    if let Some(mv) = self.captures.pop_front() {
                        return Some(mv);
                    }
                    match Square::from_u8(*next_from as u8) {
                        Some(from) => {
                            *next_from += 1;
                            self.scan_from(from);
                        }
                        None => {
                            let quiet = std::mem::take(&mut self.quiet_promotions);
                            self.stage = Stage::QuietPromotions(quiet.into_iter());
                        }
                    }
                }
                Stage::QuietPromotions(iter) => match iter.next() {
                    Some(mv) => return Some(mv),
                    None => {
                        let quiet = std::mem::take(&mut self.quiet_moves);
                        self.stage = Stage::QuietMoves(quiet.into_iter());
                    }
                },
                Stage::QuietMoves(iter) => match iter.next() {
                    Some(mv) => return Some(mv),
                    None => self.stage = Stage::Drops { hand_idx: 0, next_to: 0 },
                },
                Stage::Drops { hand_idx, next_to } => {
                    let (hand_idx, next_to) = (*hand_idx, *next_to);
                    return self.next_drop(hand_idx, next_to);
                }
                Stage::Done => return None,
            }
        }
    }
}

impl FusedIterator for MoveGenerator<'_> {}

/// 手番側の疑似合法手を生成する
///
/// 呼び出すたびに局面から新しく生成し直す。同じ局面なら常に同じ順序になる。
pub fn generate(pos: &Position) -> MoveGenerator<'_> {
    MoveGenerator::new(pos)
}

/// 自玉に王手がかかったままになる手を除いた合法手を生成する
///
/// 疑似合法手それぞれを実際に指して `is_in_check` で確かめ、局面は元に戻す。
pub fn generate_legal(pos: &mut Position) -> MoveList {
    let us = pos.side_to_move();
    let mut moves: MoveList = generate(pos).collect();
    moves.retain(|&mv| {
        pos.do_move(mv);
        let legal = !pos.is_in_check(us);
        pos.undo_move(mv);
        legal
    });
    moves
}
