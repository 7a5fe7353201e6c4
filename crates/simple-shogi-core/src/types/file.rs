//! 筋（File）

/// 筋（1筋〜9筋）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    File1 = 0,
    File2 = 1,
    File3 = 2,
    File4 = 3,
    File5 = 4,
    File6 = 5,
    File7 = 6,
    File8 = 7,
    File9 = 8,
}

impl File {
    /// 筋の数
    pub const NUM: usize = 9;

    /// 全ての筋
    pub const ALL: [File; 9] = [
        File::File1,
        File::File2,
        File::File3,
        File::File4,
        File::File5,
        File::File6,
        File::File7,
        File::File8,
        File::File9,
    ];

    /// u8からFileに変換（0-8）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<File> {
        if n < 9 {
            Some(File::ALL[n as usize])
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// USI形式の文字（'1'-'9'）に変換
    #[inline]
    pub const fn to_usi_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// USI形式の文字からFileに変換
    #[inline]
    pub const fn from_usi_char(c: char) -> Option<File> {
        if !c.is_ascii_digit() {
            return None;
        }
        File::from_u8((c as u8).wrapping_sub(b'1'))
    }

    /// 全角数字（'１'-'９'）に変換
    pub fn to_zenkaku_char(self) -> char {
        const ZENKAKU: [char; 9] = ['１', '２', '３', '４', '５', '６', '７', '８', '９'];
        ZENKAKU[self.index()]
    }
}
