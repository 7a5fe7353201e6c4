//! 駒（Piece）
//!
//! 内部値は `PieceType`（1..=14）に後手なら 14 を足したもの。
//! - 0: `Piece::NONE`
//! - 1..=14: 先手の駒
//! - 15..=28: 後手の駒
//!
//! 移動方向・成り先・手駒化などの駒ごとの性質は、すべて駒をキーにした
//! 読み取り専用テーブルから引く。

use super::direction::{Direction as D, MoveDirection};
use super::{Color, PieceType, Rank};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 駒なし
    pub const NONE: Piece = Piece(0);

    // 先手の駒
    pub const B_PAWN: Piece = Piece(1);
    pub const B_LANCE: Piece = Piece(2);
    pub const B_KNIGHT: Piece = Piece(3);
    pub const B_SILVER: Piece = Piece(4);
    pub const B_GOLD: Piece = Piece(5);
    pub const B_BISHOP: Piece = Piece(6);
    pub const B_ROOK: Piece = Piece(7);
    pub const B_KING: Piece = Piece(8);
    pub const B_PRO_PAWN: Piece = Piece(9);
    pub const B_PRO_LANCE: Piece = Piece(10);
    pub const B_PRO_KNIGHT: Piece = Piece(11);
    pub const B_PRO_SILVER: Piece = Piece(12);
    pub const B_HORSE: Piece = Piece(13);
    pub const B_DRAGON: Piece = Piece(14);

    // 後手の駒（+14）
    pub const W_PAWN: Piece = Piece(15);
    pub const W_LANCE: Piece = Piece(16);
    pub const W_KNIGHT: Piece = Piece(17);
    pub const W_SILVER: Piece = Piece(18);
    pub const W_GOLD: Piece = Piece(19);
    pub const W_BISHOP: Piece = Piece(20);
    pub const W_ROOK: Piece = Piece(21);
    pub const W_KING: Piece = Piece(22);
    pub const W_PRO_PAWN: Piece = Piece(23);
    pub const W_PRO_LANCE: Piece = Piece(24);
    pub const W_PRO_KNIGHT: Piece = Piece(25);
    pub const W_PRO_SILVER: Piece = Piece(26);
    pub const W_HORSE: Piece = Piece(27);
    pub const W_DRAGON: Piece = Piece(28);

    /// 駒の種類数（NONEを含む、配列サイズ用）
    pub const NUM: usize = 29;

    const WHITE_OFFSET: u8 = PieceType::NUM as u8;

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        match color {
            Color::Black => Piece(piece_type as u8),
            Color::White => Piece(piece_type as u8 + Self::WHITE_OFFSET),
        }
    }

    /// 駒種を取得
    ///
    /// `Piece::NONE` に対して呼んではならない。
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(self.is_some(), "piece_type() called on Piece::NONE");
        let raw = if self.0 > Self::WHITE_OFFSET { self.0 - Self::WHITE_OFFSET } else { self.0 };
        match PieceType::from_u8(raw) {
            Some(pt) => pt,
            None => PieceType::Pawn,
        }
    }

    /// 手番を取得（内部値の範囲から決まる）
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 > Self::WHITE_OFFSET { Color::White } else { Color::Black }
    }

    /// 駒がないか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// 駒があるか
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// 玉か
    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 == Self::B_KING.0 || self.0 == Self::W_KING.0
    }

    /// 成れる駒か
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.is_some() && self.piece_type().can_promote()
    }

    /// 成り駒を返す
    #[inline]
    pub const fn promote(self) -> Option<Piece> {
        if self.is_none() {
            return None;
        }
        match self.piece_type().promote() {
            Some(pt) => Some(Piece::new(self.color(), pt)),
            None => None,
        }
    }

    /// 生駒を返す
    #[inline]
    pub const fn unpromote(self) -> Piece {
        if self.is_none() {
            return self;
        }
        Piece::new(self.color(), self.piece_type().unpromote())
    }

    /// この駒を取った側の手駒としての駒（先後反転・生駒）
    #[inline]
    pub const fn to_opponent_hand(self) -> Piece {
        if self.is_none() || self.is_king() {
            return Piece::NONE;
        }
        Piece::new(self.color().opponent(), self.piece_type().unpromote())
    }

    /// インデックス（0-28、0は駒なし）
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 移動できる方向の一覧
    #[inline]
    pub fn move_directions(self) -> &'static [MoveDirection] {
        MOVE_DIRECTIONS[self.index()]
    }

    /// 成らずにこの段へ置けるか（行き所のない駒の判定）
    ///
    /// 歩・香は最奥の段、桂は奥の2段に成らずに置けない。駒打ちにも同じ制約を使う。
    #[inline]
    pub const fn can_put_without_promotion(self, rank: Rank) -> bool {
        if self.is_none() {
            return false;
        }
        let relative = rank.relative(self.color()) as u8;
        match self.piece_type() {
            PieceType::Pawn | PieceType::Lance => relative >= Rank::Rank2 as u8,
            PieceType::Knight => relative >= Rank::Rank3 as u8,
            _ => true,
        }
    }

    /// SFEN 表記（成駒は '+' 付き、後手は小文字）
    pub fn to_sfen(self) -> String {
        if self.is_none() {
            return String::new();
        }
        let pt = self.piece_type();
        let c = match self.color() {
            Color::Black => pt.to_sfen_char(),
            Color::White => pt.to_sfen_char().to_ascii_lowercase(),
        };
        if pt.is_promoted() { format!("+{c}") } else { c.to_string() }
    }

    /// SFEN の駒文字（生駒のみ）から変換
    #[inline]
    pub const fn from_sfen_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
        match PieceType::from_sfen_char(c) {
            Some(pt) if c.is_ascii_alphabetic() => Some(Piece::new(color, pt)),
            _ => None,
        }
    }

    /// 盤面表示用の4桁幅の文字列（後手の駒には '↓' を付ける）
    pub fn to_board_cell(self) -> String {
        if self.is_none() {
            return "    ".to_string();
        }
        let mark = match self.color() {
            Color::Black => ' ',
            Color::White => '↓',
        };
        format!(" {}{}", self.piece_type().kanji(), mark)
    }
}

const GOLD_LIKE_BLACK: &[MoveDirection] = &[
    MoveDirection::step(D::UP_LEFT),
    MoveDirection::step(D::UP),
    MoveDirection::step(D::UP_RIGHT),
    MoveDirection::step(D::LEFT),
    MoveDirection::step(D::RIGHT),
    MoveDirection::step(D::DOWN),
];

const GOLD_LIKE_WHITE: &[MoveDirection] = &[
    MoveDirection::step(D::UP),
    MoveDirection::step(D::LEFT),
    MoveDirection::step(D::RIGHT),
    MoveDirection::step(D::DOWN_LEFT),
    MoveDirection::step(D::DOWN),
    MoveDirection::step(D::DOWN_RIGHT),
];

const KING: &[MoveDirection] = &[
    MoveDirection::step(D::UP_LEFT),
    MoveDirection::step(D::UP),
    MoveDirection::step(D::UP_RIGHT),
    MoveDirection::step(D::LEFT),
    MoveDirection::step(D::RIGHT),
    MoveDirection::step(D::DOWN_LEFT),
    MoveDirection::step(D::DOWN),
    MoveDirection::step(D::DOWN_RIGHT),
];

const BISHOP: &[MoveDirection] = &[
    MoveDirection::slide(D::UP_LEFT),
    MoveDirection::slide(D::UP_RIGHT),
    MoveDirection::slide(D::DOWN_LEFT),
    MoveDirection::slide(D::DOWN_RIGHT),
];

const ROOK: &[MoveDirection] = &[
    MoveDirection::slide(D::UP),
    MoveDirection::slide(D::LEFT),
    MoveDirection::slide(D::RIGHT),
    MoveDirection::slide(D::DOWN),
];

const HORSE: &[MoveDirection] = &[
    MoveDirection::slide(D::UP_LEFT),
    MoveDirection::step(D::UP),
    MoveDirection::slide(D::UP_RIGHT),
    MoveDirection::step(D::LEFT),
    MoveDirection::step(D::RIGHT),
    MoveDirection::slide(D::DOWN_LEFT),
    MoveDirection::step(D::DOWN),
    MoveDirection::slide(D::DOWN_RIGHT),
];

const DRAGON: &[MoveDirection] = &[
    MoveDirection::step(D::UP_LEFT),
    MoveDirection::slide(D::UP),
    MoveDirection::step(D::UP_RIGHT),
    MoveDirection::slide(D::LEFT),
    MoveDirection::slide(D::RIGHT),
    MoveDirection::step(D::DOWN_LEFT),
    MoveDirection::slide(D::DOWN),
    MoveDirection::step(D::DOWN_RIGHT),
];

/// 駒ごとの移動方向（添字は `Piece::index()`）。方向の並びは指し手生成順を決める。
static MOVE_DIRECTIONS: [&[MoveDirection]; Piece::NUM] = [
    // NONE
    &[],
    // 先手 歩
    &[MoveDirection::step(D::UP)],
    // 先手 香
    &[MoveDirection::slide(D::UP)],
    // 先手 桂
    &[MoveDirection::step(D::new(-1, -2)), MoveDirection::step(D::new(1, -2))],
    // 先手 銀
    &[
        MoveDirection::step(D::UP_LEFT),
        MoveDirection::step(D::UP),
        MoveDirection::step(D::UP_RIGHT),
        MoveDirection::step(D::DOWN_LEFT),
        MoveDirection::step(D::DOWN_RIGHT),
    ],
    // 先手 金
    GOLD_LIKE_BLACK,
    // 先手 角
    BISHOP,
    // 先手 飛
    ROOK,
    // 先手 王
    KING,
    // 先手 と・杏・圭・全
    GOLD_LIKE_BLACK,
    GOLD_LIKE_BLACK,
    GOLD_LIKE_BLACK,
    GOLD_LIKE_BLACK,
    // 先手 馬・龍
    HORSE,
    DRAGON,
    // 後手 歩
    &[MoveDirection::step(D::DOWN)],
    // 後手 香
    &[MoveDirection::slide(D::DOWN)],
    // 後手 桂
    &[MoveDirection::step(D::new(1, 2)), MoveDirection::step(D::new(-1, 2))],
    // 後手 銀
    &[
        MoveDirection::step(D::UP_LEFT),
        MoveDirection::step(D::UP_RIGHT),
        MoveDirection::step(D::DOWN_LEFT),
        MoveDirection::step(D::DOWN),
        MoveDirection::step(D::DOWN_RIGHT),
    ],
    // 後手 金
    GOLD_LIKE_WHITE,
    // 後手 角
    BISHOP,
    // 後手 飛
    ROOK,
    // 後手 王
    KING,
    // 後手 と・杏・圭・全
    GOLD_LIKE_WHITE,
    GOLD_LIKE_WHITE,
    GOLD_LIKE_WHITE,
    GOLD_LIKE_WHITE,
    // 後手 馬・龍
    HORSE,
    DRAGON,
];
