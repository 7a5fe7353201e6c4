//! 局面確認用の独自コマンド（`generatemove` / `d` / `sfen`）

use anyhow::{bail, Result};

use simple_shogi_core::movegen::{generate, generate_legal, MoveList};

use crate::io::usi_println;
use crate::state::EngineState;

/// `generatemove [legal]`: 指し手を1行ずつ表示し、最後に合計を出す
pub fn handle_generatemove(cmd: &str, state: &mut EngineState) -> Result<()> {
    let moves: MoveList = match cmd.split_whitespace().nth(1) {
        None => generate(&state.position).collect(),
        Some("legal") => generate_legal(&mut state.position),
        Some(other) => bail!("unknown generatemove mode {other:?}"),
    };
    for mv in &moves {
        usi_println(&mv.to_string());
    }
    usi_println(&format!("合計 {} 通り", moves.len()));
    Ok(())
}

/// `d [json]`: 盤面図、または盤面のJSON
pub fn handle_display(cmd: &str, state: &EngineState) -> Result<()> {
    match cmd.split_whitespace().nth(1) {
        None => usi_println(state.position.to_string().trim_end()),
        Some("json") => usi_println(&serde_json::to_string(&state.position.to_board_json())?),
        Some(other) => bail!("unknown display mode {other:?}"),
    }
    Ok(())
}

/// `sfen`: 現局面のSFEN
pub fn handle_sfen(state: &EngineState) {
    usi_println(&format!("sfen {}", state.position.to_sfen()));
}
