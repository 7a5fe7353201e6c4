//! 局面の表示（盤面図・JSON）

use std::fmt;

use crate::types::json::{owner_name, BoardStateJson, CellJson, HandJson, HandsJson, PieceJson};
use crate::types::{Color, File, Piece, Rank, Square};

use super::pos::Position;

const BORDER: &str = "+----+----+----+----+----+----+----+----+----+";

impl Position {
    /// 現在の盤面をJSON形式に変換する。
    pub fn to_board_json(&self) -> BoardStateJson {
        let cells = Rank::ALL
            .into_iter()
            .map(|rank| {
                File::ALL
                    .into_iter()
                    .map(|file| {
                        let sq = Square::new(file, rank);
                        CellJson {
                            square: sq.to_usi(),
                            piece: PieceJson::from_piece(self.piece_on(sq)),
                        }
                    })
                    .collect()
            })
            .collect();

        BoardStateJson {
            cells,
            hands: HandsJson {
                sente: HandJson::from(self.hand(Color::Black)),
                gote: HandJson::from(self.hand(Color::White)),
            },
            turn: owner_name(self.side_to_move()).to_string(),
            ply: self.ply(),
        }
    }

    /// 手駒を漢字1文字ずつ並べた文字列（歩〜飛の順）
    fn hand_kanji(&self, color: Color) -> String {
        self.hand(color)
            .iter()
            .flat_map(|(pt, n)| std::iter::repeat_n(pt.kanji(), n as usize))
            .collect()
    }
}

/// 盤面図（上が1段目、左が9筋）、手駒、手番
///
/// ```text
/// +----+----+ ... +----+
/// | 香↓| 桂↓| ... | 香↓|
/// ...
/// 先手 手駒: 歩歩 , 後手 手駒: 角
/// 手番 = 先手
/// ```
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        for rank in Rank::ALL {
            f.write_str("|")?;
            for file in File::ALL.iter().rev() {
                let pc: Piece = self.piece_on(Square::new(*file, rank));
                write!(f, "{}|", pc.to_board_cell())?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        writeln!(
            f,
            "先手 手駒: {} , 後手 手駒: {}",
            self.hand_kanji(Color::Black),
            self.hand_kanji(Color::White)
        )?;
        let side = match self.side_to_move() {
            Color::Black => "先手",
            Color::White => "後手",
        };
        writeln!(f, "手番 = {side}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_startpos() {
        let text = Position::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[1], "| 香↓| 桂↓| 銀↓| 金↓| 王↓| 金↓| 銀↓| 桂↓| 香↓|");
        assert_eq!(lines[3], "|    | 飛↓|    |    |    |    |    | 角↓|    |");
        assert_eq!(lines[15], "|    | 角 |    |    |    |    |    | 飛 |    |");
        assert_eq!(lines[19], "先手 手駒:  , 後手 手駒: ");
        assert_eq!(lines[20], "手番 = 先手");
    }

    #[test]
    fn test_display_hands() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w R2Pb 1").unwrap();
        let text = pos.to_string();
        assert!(text.contains("先手 手駒: 歩歩飛 , 後手 手駒: 角"));
        assert!(text.ends_with("手番 = 後手\n"));
    }

    #[test]
    fn test_board_json() {
        let pos = Position::from_sfen("4k4/9/9/9/9/9/9/9/4K4 w R2Pb 7").unwrap();
        let json = pos.to_board_json();
        assert_eq!(json.turn, "gote");
        assert_eq!(json.ply, 7);
        assert_eq!(json.cells.len(), 9);
        assert_eq!(json.cells[0][4].square, "5a");
        assert_eq!(json.cells[0][4].piece.as_ref().map(|p| p.owner.as_str()), Some("gote"));
        assert_eq!(json.cells[8][4].piece.as_ref().map(|p| p.piece_type.as_str()), Some("K"));
        assert_eq!(json.hands.sente.pawn, Some(2));
        assert_eq!(json.hands.gote.bishop, Some(1));

        let text = serde_json::to_string(&json).unwrap();
        let back: BoardStateJson = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json);
    }
}
