//! 手駒（Hand）

use super::PieceType;

/// 片方の手番の手駒。駒種（歩〜飛）ごとの枚数を持つ
///
/// 手駒は常に生駒で、成駒・玉は入らない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand([u32; PieceType::HAND_NUM]);

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand([0; PieceType::HAND_NUM]);

    /// 指定駒種の枚数を取得
    #[inline]
    pub const fn count(self, pt: PieceType) -> u32 {
        match pt.hand_index() {
            Some(i) => self.0[i],
            None => 0,
        }
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(self, pt: PieceType) -> bool {
        self.count(pt) > 0
    }

    /// 1枚追加
    #[inline]
    pub fn add(mut self, pt: PieceType) -> Hand {
        let i = Self::slot(pt);
        self.0[i] += 1;
        self
    }

    /// 1枚減らす
    #[inline]
    pub fn sub(mut self, pt: PieceType) -> Hand {
        let i = Self::slot(pt);
        assert!(self.0[i] > 0, "hand underflow: {pt:?}");
        self.0[i] -= 1;
        self
    }

    /// 指定枚数をセット
    #[inline]
    pub fn set(mut self, pt: PieceType, count: u32) -> Hand {
        let i = Self::slot(pt);
        self.0[i] = count;
        self
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// 全駒種の合計枚数
    #[inline]
    pub fn total(self) -> u32 {
        self.0.iter().sum()
    }

    /// (駒種, 枚数) を歩〜飛の順に返す（0枚の駒種も含む）
    pub fn iter(self) -> impl Iterator<Item = (PieceType, u32)> {
        PieceType::HAND_PIECES.into_iter().map(move |pt| (pt, self.count(pt)))
    }

    fn slot(pt: PieceType) -> usize {
        match pt.hand_index() {
            Some(i) => i,
            None => panic!("{pt:?} cannot be held in hand"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_empty() {
        let hand = Hand::EMPTY;
        assert!(hand.is_empty());
        assert_eq!(hand.count(PieceType::Pawn), 0);
        assert!(!hand.has(PieceType::Pawn));
        assert_eq!(hand.count(PieceType::King), 0);
    }

    #[test]
    fn test_hand_add_sub() {
        let hand = Hand::EMPTY.add(PieceType::Rook).add(PieceType::Rook);
        assert_eq!(hand.count(PieceType::Rook), 2);

        let hand = hand.sub(PieceType::Rook);
        assert_eq!(hand.count(PieceType::Rook), 1);

        let hand = hand.sub(PieceType::Rook);
        assert!(!hand.has(PieceType::Rook));
        assert!(hand.is_empty());
    }

    #[test]
    #[should_panic(expected = "hand underflow")]
    fn test_hand_sub_underflow() {
        let _ = Hand::EMPTY.sub(PieceType::Gold);
    }

    #[test]
    #[should_panic(expected = "cannot be held in hand")]
    fn test_hand_add_king() {
        let _ = Hand::EMPTY.add(PieceType::King);
    }

    #[test]
    fn test_hand_set_and_total() {
        let hand = Hand::EMPTY.set(PieceType::Pawn, 18).set(PieceType::Gold, 3);
        assert_eq!(hand.count(PieceType::Pawn), 18);
        assert_eq!(hand.count(PieceType::Gold), 3);
        assert_eq!(hand.total(), 21);
    }

    #[test]
    fn test_hand_iter_order() {
        let hand = Hand::EMPTY.add(PieceType::Bishop);
        let items: Vec<_> = hand.iter().collect();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0], (PieceType::Pawn, 0));
        assert_eq!(items[5], (PieceType::Bishop, 1));
    }
}
