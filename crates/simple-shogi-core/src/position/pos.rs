//! 局面本体

use crate::types::{Color, File, Hand, Move, Piece, PieceType, Square};

/// 局面
///
/// 盤面は升のインデックス（`Square::index()`）で引く81要素の配列。
/// 盤上と両者の手駒を合わせた駒の総数は `do_move` / `undo_move` を通じて保存される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: [Piece; Square::NUM],
    hands: [Hand; Color::NUM],
    side_to_move: Color,
    ply: i32,
    /// 玉の位置（盤上にいなければ None）
    king_square: [Option<Square>; Color::NUM],
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// 空の盤面（先手番、1手目）
    pub fn new() -> Position {
        Position {
            board: [Piece::NONE; Square::NUM],
            hands: [Hand::EMPTY; Color::NUM],
            side_to_move: Color::Black,
            ply: 1,
            king_square: [None; Color::NUM],
        }
    }

    /// 平手の初期局面
    pub fn startpos() -> Position {
        match Position::from_sfen(super::SFEN_HIRATE) {
            Ok(pos) => pos,
            Err(e) => unreachable!("SFEN_HIRATE must parse: {e}"),
        }
    }

    // ------------------------------------------------------------------
    // 参照
    // ------------------------------------------------------------------

    /// 升にある駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.board[sq.index()]
    }

    /// 手駒
    #[inline]
    pub fn hand(&self, color: Color) -> Hand {
        self.hands[color.index()]
    }

    /// 手番
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 手数
    #[inline]
    pub fn ply(&self) -> i32 {
        self.ply
    }

    /// 玉の位置（盤上にいなければ None）
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_square[color.index()]
    }

    /// 盤上の駒を走査順（筋が外側、段が内側）に返す
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|sq| (sq, self.piece_on(sq)))
            .filter(|&(_, pc)| pc.is_some())
    }

    /// 指定した筋に `color` の歩（成っていない歩）があるか
    pub fn has_pawn_on_file(&self, color: Color, file: File) -> bool {
        let pawn = Piece::new(color, PieceType::Pawn);
        Square::in_file(file).any(|sq| self.piece_on(sq) == pawn)
    }

    // ------------------------------------------------------------------
    // 局面の設定（SFEN 解析から使う）
    // ------------------------------------------------------------------

    pub(super) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(super) fn set_ply(&mut self, ply: i32) {
        self.ply = ply;
    }

    pub(super) fn set_hand_count(&mut self, color: Color, pt: PieceType, count: u32) {
        let hand = &mut self.hands[color.index()];
        *hand = hand.set(pt, count);
    }

    // ------------------------------------------------------------------
    // 盤面・手駒の更新
    // ------------------------------------------------------------------

    /// 空き升に駒を置く
    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        assert!(piece.is_some(), "put_piece: NONE on {sq}");
        assert!(
            self.board[sq.index()].is_none(),
            "put_piece: {sq} already holds {:?}",
            self.board[sq.index()]
        );
        self.board[sq.index()] = piece;
        if piece.is_king() {
            self.king_square[piece.color().index()] = Some(sq);
        }
    }

    /// 升の駒を取り除いて返す
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Piece {
        let piece = self.board[sq.index()];
        assert!(piece.is_some(), "remove_piece: {sq} is empty");
        self.board[sq.index()] = Piece::NONE;
        if piece.is_king() {
            self.king_square[piece.color().index()] = None;
        }
        piece
    }

    /// 手駒に1枚加える（`piece` の色の手駒になる）
    fn put_hand_piece(&mut self, piece: Piece) {
        let hand = &mut self.hands[piece.color().index()];
        *hand = hand.add(piece.piece_type());
    }

    /// 手駒から1枚取り除く
    fn remove_hand_piece(&mut self, piece: Piece) {
        let hand = &mut self.hands[piece.color().index()];
        *hand = hand.sub(piece.piece_type());
    }

    // ------------------------------------------------------------------
    // 手の実行・巻き戻し
    // ------------------------------------------------------------------

    /// 指し手に従って局面を1手進める
    ///
    /// 指し手は現局面の手番側のもので、移動元に `piece`、移動先に `captured` が
    /// なければならない。満たさない場合は呼び出し側の誤りとして panic する。
    /// 玉を取る手も適用できるが、取った玉は手駒にならない。
    pub fn do_move(&mut self, mv: Move) {
        let side = match mv.side() {
            Some(side) => side,
            None => panic!("do_move: {mv:?} cannot be applied to a position"),
        };
        assert_eq!(side, self.side_to_move, "do_move: {mv:?} is not for the side to move");

        match mv {
            Move::Normal { from, to, piece, captured, promote } => {
                assert_eq!(self.piece_on(from), piece, "do_move: origin mismatch for {mv:?}");
                assert_eq!(self.piece_on(to), captured, "do_move: target mismatch for {mv:?}");

                if captured.is_some() {
                    self.remove_piece(to);
                    let hand_piece = captured.to_opponent_hand();
                    if hand_piece.is_some() {
                        self.put_hand_piece(hand_piece);
                    }
                }

                self.remove_piece(from);
                self.put_piece(to, placed_piece(piece, promote));
            }
            Move::Drop { to, piece } => {
                self.remove_hand_piece(piece);
                self.put_piece(to, piece);
            }
            Move::Resign | Move::Win | Move::Null => unreachable!(),
        }

        self.side_to_move = self.side_to_move.opponent();
        self.ply += 1;
    }

    /// `do_move(mv)` の直後の局面から1手戻す
    ///
    /// `do_move` と対で呼ぶと、盤面・手駒・手番・手数・玉の位置が完全に元に戻る。
    pub fn undo_move(&mut self, mv: Move) {
        let side = match mv.side() {
            Some(side) => side,
            None => panic!("undo_move: {mv:?} cannot be retracted"),
        };
        assert_ne!(side, self.side_to_move, "undo_move: {mv:?} was not the last move");

        self.ply -= 1;
        self.side_to_move = self.side_to_move.opponent();

        match mv {
            Move::Normal { from, to, piece, captured, promote } => {
                let placed = self.remove_piece(to);
                assert_eq!(
                    placed,
                    placed_piece(piece, promote),
                    "undo_move: target mismatch for {mv:?}"
                );
                self.put_piece(from, piece);

                if captured.is_some() {
                    let hand_piece = captured.to_opponent_hand();
                    if hand_piece.is_some() {
                        self.remove_hand_piece(hand_piece);
                    }
                    self.put_piece(to, captured);
                }
            }
            Move::Drop { to, piece } => {
                let placed = self.remove_piece(to);
                assert_eq!(placed, piece, "undo_move: target mismatch for {mv:?}");
                self.put_hand_piece(piece);
            }
            Move::Resign | Move::Win | Move::Null => unreachable!(),
        }
    }

    // ------------------------------------------------------------------
    // 王手判定
    // ------------------------------------------------------------------

    /// `color` の玉が相手の駒の利きに入っているか
    ///
    /// 相手の駒それぞれについて移動方向に利きを伸ばし、最初に当たった駒が
    /// `color` の玉なら王手。飛び駒の利きは敵味方を問わず駒に当たったところで止まる。
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = Piece::new(color, PieceType::King);
        self.pieces()
            .filter(|&(_, pc)| pc.color() != color)
            .any(|(from, pc)| {
                pc.move_directions().iter().any(|&md| {
                    from.ray(md)
                        .map(|to| self.piece_on(to))
                        .find(|target| target.is_some())
                        == Some(king)
                })
            })
    }
}

/// 移動後に置かれる駒
fn placed_piece(piece: Piece, promote: bool) -> Piece {
    if !promote {
        return piece;
    }
    match piece.promote() {
        Some(promoted) => promoted,
        None => panic!("{piece:?} cannot promote"),
    }
}
