//! 升目（Square）

use super::{Direction, File, MoveDirection, Rank};

/// 升目（0-80）
///
/// SQ_11(1一)=0, SQ_12(1二)=1, ..., SQ_19(1九)=8, SQ_21(2一)=9, ...
/// 昇順に走査すると「筋が外側、段が内側」の順になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// 1一
    pub const SQ_11: Square = Square(0);
    /// 5五（中央）
    pub const SQ_55: Square = Square(40);
    /// 9九
    pub const SQ_99: Square = Square(80);

    /// FileとRankからSquareを生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(file as u8 * 9 + rank as u8)
    }

    /// 筋を取得
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 / 9) as usize]
    }

    /// 段を取得
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 9) as usize]
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < 81 { Some(Square(n)) } else { None }
    }

    /// 筋・段のインデックス（0-8）から生成。盤外なら None
    #[inline]
    pub const fn from_coords(file: i32, rank: i32) -> Option<Square> {
        if file < 0 || file >= 9 || rank < 0 || rank >= 9 {
            return None;
        }
        Some(Square((file * 9 + rank) as u8))
    }

    /// 方向に1マス進めた升。盤外に出る場合は None
    #[inline]
    pub const fn offset(self, dir: Direction) -> Option<Square> {
        Square::from_coords(
            (self.0 / 9) as i32 + dir.file as i32,
            (self.0 % 9) as i32 + dir.rank as i32,
        )
    }

    /// `md` の方向に1マスずつ進んだ升を、盤外に出るか最大距離に達するまで返す
    ///
    /// 駒の有無は見ないので、遮られたところで打ち切るのは呼び出し側の役目。
    pub fn ray(self, md: MoveDirection) -> impl Iterator<Item = Square> {
        std::iter::successors(self.offset(md.direction), move |sq| sq.offset(md.direction))
            .take(md.max_distance())
    }

    /// USI形式の文字列（"7g"等）に変換
    pub fn to_usi(self) -> String {
        format!("{}{}", self.file().to_usi_char(), self.rank().to_usi_char())
    }

    /// USI形式の文字列からSquareに変換
    pub fn from_usi(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_usi_char(chars.next()?)?;
        let rank = Rank::from_usi_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// 全ての升を走査順に返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..81).map(Square)
    }

    /// 指定した筋の升を段の昇順に返すイテレータ
    pub fn in_file(file: File) -> impl Iterator<Item = Square> {
        Rank::ALL.into_iter().map(move |rank| Square::new(file, rank))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_usi_char(), self.rank().to_usi_char())
    }
}
