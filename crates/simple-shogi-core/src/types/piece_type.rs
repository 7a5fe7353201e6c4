//! 駒種（PieceType）

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceType {
    // 生駒
    Pawn = 1,
    Lance = 2,
    Knight = 3,
    Silver = 4,
    Gold = 5,
    Bishop = 6,
    Rook = 7,
    King = 8,
    // 成駒
    ProPawn = 9,
    ProLance = 10,
    ProKnight = 11,
    ProSilver = 12,
    Horse = 13,  // 成角
    Dragon = 14, // 成飛
}

impl PieceType {
    /// 有効な駒種の数（1-14）
    pub const NUM: usize = 14;

    /// 手駒になる駒種の数
    pub const HAND_NUM: usize = 7;

    /// 全ての駒種
    pub const ALL: [PieceType; 14] = [
        PieceType::Pawn,
        PieceType::Lance,
        PieceType::Knight,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::King,
        PieceType::ProPawn,
        PieceType::ProLance,
        PieceType::ProKnight,
        PieceType::ProSilver,
        PieceType::Horse,
        PieceType::Dragon,
    ];

    /// 手駒になる駒種一覧（駒打ちの生成順）
    pub const HAND_PIECES: [PieceType; 7] = [
        PieceType::Pawn,
        PieceType::Lance,
        PieceType::Knight,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Bishop,
        PieceType::Rook,
    ];

    /// 成れるかどうか
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.promote().is_some()
    }

    /// 成り駒を返す（成れない場合はNone）
    #[inline]
    pub const fn promote(self) -> Option<PieceType> {
        match self {
            PieceType::Pawn => Some(PieceType::ProPawn),
            PieceType::Lance => Some(PieceType::ProLance),
            PieceType::Knight => Some(PieceType::ProKnight),
            PieceType::Silver => Some(PieceType::ProSilver),
            PieceType::Bishop => Some(PieceType::Horse),
            PieceType::Rook => Some(PieceType::Dragon),
            _ => None,
        }
    }

    /// 生駒を返す（既に生駒の場合はそのまま）
    #[inline]
    pub const fn unpromote(self) -> PieceType {
        match self {
            PieceType::ProPawn => PieceType::Pawn,
            PieceType::ProLance => PieceType::Lance,
            PieceType::ProKnight => PieceType::Knight,
            PieceType::ProSilver => PieceType::Silver,
            PieceType::Horse => PieceType::Bishop,
            PieceType::Dragon => PieceType::Rook,
            _ => self,
        }
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self as u8 >= PieceType::ProPawn as u8
    }

    /// インデックス（1-14）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 手駒配列のインデックス（歩=0 〜 飛=6）。手駒にならない駒種は None
    #[inline]
    pub const fn hand_index(self) -> Option<usize> {
        if self as u8 <= PieceType::Rook as u8 {
            Some(self as usize - 1)
        } else {
            None
        }
    }

    /// u8から変換（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<PieceType> {
        if n >= 1 && n <= 14 {
            Some(PieceType::ALL[n as usize - 1])
        } else {
            None
        }
    }

    /// SFEN / USI で使う英字（大文字、生駒の字）
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self.unpromote() {
            PieceType::Pawn => 'P',
            PieceType::Lance => 'L',
            PieceType::Knight => 'N',
            PieceType::Silver => 'S',
            PieceType::Gold => 'G',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            _ => 'K',
        }
    }

    /// 英字から生駒の駒種へ変換（大文字・小文字は区別しない）
    #[inline]
    pub const fn from_sfen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'L' => Some(PieceType::Lance),
            'N' => Some(PieceType::Knight),
            'S' => Some(PieceType::Silver),
            'G' => Some(PieceType::Gold),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    /// 盤面表示用の一文字
    pub const fn kanji(self) -> char {
        match self {
            PieceType::Pawn => '歩',
            PieceType::Lance => '香',
            PieceType::Knight => '桂',
            PieceType::Silver => '銀',
            PieceType::Gold => '金',
            PieceType::Bishop => '角',
            PieceType::Rook => '飛',
            PieceType::King => '王',
            PieceType::ProPawn => 'と',
            PieceType::ProLance => '杏',
            PieceType::ProKnight => '圭',
            PieceType::ProSilver => '全',
            PieceType::Horse => '馬',
            PieceType::Dragon => '龍',
        }
    }
}
