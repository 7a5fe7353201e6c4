//! 駒の移動方向
//!
//! 方向は先手視点で定義する。筋は 1筋→9筋 が正、段は 1段→9段 が正なので、
//! 先手の「上」は `rank = -1` になる。

/// 1マス分の移動量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub file: i8,
    pub rank: i8,
}

impl Direction {
    pub const UP_LEFT: Direction = Direction::new(1, -1);
    pub const UP: Direction = Direction::new(0, -1);
    pub const UP_RIGHT: Direction = Direction::new(-1, -1);
    pub const LEFT: Direction = Direction::new(1, 0);
    pub const RIGHT: Direction = Direction::new(-1, 0);
    pub const DOWN_LEFT: Direction = Direction::new(1, 1);
    pub const DOWN: Direction = Direction::new(0, 1);
    pub const DOWN_RIGHT: Direction = Direction::new(-1, 1);

    #[inline]
    pub const fn new(file: i8, rank: i8) -> Direction {
        Direction { file, rank }
    }
}

/// 駒が動ける方向と、その方向に走れるか（飛び駒か）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDirection {
    pub direction: Direction,
    pub long: bool,
}

impl MoveDirection {
    /// 飛び駒が走る最大距離
    pub const MAX_DISTANCE: usize = 8;

    /// 1マスだけ動ける方向
    #[inline]
    pub const fn step(direction: Direction) -> MoveDirection {
        MoveDirection { direction, long: false }
    }

    /// 遮られるまで走れる方向
    #[inline]
    pub const fn slide(direction: Direction) -> MoveDirection {
        MoveDirection { direction, long: true }
    }

    /// この方向に進める最大距離
    #[inline]
    pub const fn max_distance(self) -> usize {
        if self.long { Self::MAX_DISTANCE } else { 1 }
    }
}
