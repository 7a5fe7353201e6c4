//! 指し手リスト

use crate::types::Move;

/// 1局面の疑似合法手数の目安（バッファの初期容量）
pub const MAX_MOVES: usize = 600;

/// 指し手生成バッファ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// 空のMoveListを作成
    #[inline]
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    /// 指し手の数
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// イテレータを取得
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// 指定された指し手が含まれているか
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    /// 指し手を追加
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// 条件を満たす指し手だけを残す
    pub fn retain(&mut self, f: impl FnMut(&Move) -> bool) {
        self.moves.retain(f);
    }

    /// スライスとして取得
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        list.moves.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Piece, Rank, Square};

    #[test]
    fn test_movelist_new() {
        let list = MoveList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_movelist_push_and_contains() {
        let mut list = MoveList::new();
        let sq1 = Square::new(File::File7, Rank::Rank7);
        let sq2 = Square::new(File::File7, Rank::Rank6);
        let mv = Move::normal(sq1, sq2, Piece::B_PAWN, Piece::NONE, false);
        let drop = Move::drop(sq2, Piece::B_GOLD);

        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert!(list.contains(mv));
        assert!(!list.contains(drop));

        list.push(drop);
        list.retain(|m| m.is_drop());
        assert_eq!(list.as_slice(), &[drop]);
    }
}
