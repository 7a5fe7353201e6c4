use anyhow::{anyhow, bail, Context, Result};
use log::info;

use simple_shogi_core::movegen::generate_legal;
use simple_shogi_core::search::Searcher;
use simple_shogi_core::{Move, Position, Value};

use crate::io::usi_println;
use crate::state::{EngineState, MAX_DEPTH};

/// `position startpos|sfen <sfen> [moves ...]`
///
/// 指し手はすべて合法手であることを確かめてから進める。途中で失敗した場合は
/// 現在の局面を変更しない。
pub fn parse_position(cmd: &str, state: &mut EngineState) -> Result<()> {
    let mut tokens = cmd.split_whitespace().skip(1).peekable();

    let mut pos = match tokens.next() {
        Some("startpos") => Position::startpos(),
        Some("sfen") => {
            let mut sfen_parts: Vec<&str> = Vec::new();
            while let Some(t) = tokens.next_if(|t| *t != "moves") {
                sfen_parts.push(t);
            }
            let sfen = sfen_parts.join(" ");
            Position::from_sfen(&sfen).with_context(|| format!("invalid sfen {sfen:?}"))?
        }
        other => bail!("expected startpos or sfen, got {other:?}"),
    };

    match tokens.next() {
        None => {}
        Some("moves") => {
            for token in tokens {
                apply_usi_move(&mut pos, token)?;
            }
        }
        Some(other) => bail!("unexpected token {other:?} in position command"),
    }

    state.position = pos;
    Ok(())
}

fn apply_usi_move(pos: &mut Position, token: &str) -> Result<()> {
    let mv = Move::from_usi(token, pos).with_context(|| format!("invalid move {token:?}"))?;
    match mv {
        Move::Null => return Ok(()),
        Move::Resign | Move::Win => bail!("{token} cannot be played on the board"),
        Move::Normal { .. } | Move::Drop { .. } => {}
    }
    if !generate_legal(pos).contains(mv) {
        return Err(anyhow!("illegal move {token} in position {}", pos.to_sfen()));
    }
    pos.do_move(mv);
    Ok(())
}

/// `go [depth N]` のうち使うパラメータ
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
}

pub fn parse_go(cmd: &str) -> Result<GoParams> {
    let mut gp = GoParams::default();
    let mut it = cmd.split_whitespace().skip(1);
    while let Some(tok) = it.next() {
        match tok {
            "depth" => {
                let value = it.next().context("go depth requires a value")?;
                let depth: u32 = value.parse().with_context(|| format!("invalid depth {value:?}"))?;
                gp.depth = Some(depth.clamp(1, MAX_DEPTH));
            }
            other => info!("Ignoring go parameter: {other}"),
        }
    }
    Ok(gp)
}

pub fn handle_go(cmd: &str, state: &mut EngineState) -> Result<()> {
    let gp = parse_go(cmd)?;
    let depth = gp.depth.unwrap_or(state.opts.depth);

    let result = Searcher::default().search(&mut state.position, depth);

    let pv = match result.best_move {
        Move::Resign => String::new(),
        mv => format!(" pv {}", mv.to_usi()),
    };
    usi_println(&format!(
        "info depth {depth} nodes {} score {}{pv}",
        result.nodes,
        format_score(result.value)
    ));
    usi_println(&format!("bestmove {}", result.best_move.to_usi()));
    Ok(())
}

/// USI の score 表記。玉の取り合いで決まった値は `mate +` / `mate -`
fn format_score(value: Value) -> String {
    if value.is_decisive() {
        let sign = if value > Value::ZERO { '+' } else { '-' };
        format!("mate {sign}")
    } else {
        format!("cp {}", value.to_cp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_startpos_moves() {
        let mut state = EngineState::new(3);
        parse_position("position startpos moves 7g7f 3c3d none 8h2b+", &mut state).unwrap();
        assert_eq!(
            state.position.to_sfen(),
            "lnsgkgsnl/1r5+B1/pppppp1pp/6p2/9/2P6/PP1PPPPPP/7R1/LNSGKGSNL w B 4"
        );
    }

    #[test]
    fn test_parse_position_sfen() {
        let mut state = EngineState::new(3);
        parse_position("position sfen 4k4/9/9/9/9/9/9/9/4K4 b G 1 moves G*5b", &mut state).unwrap();
        assert_eq!(state.position.to_sfen(), "4k4/4G4/9/9/9/9/9/9/4K4 w - 2");
    }

    #[test]
    fn test_parse_position_rejects_illegal_move_and_keeps_state() {
        let mut state = EngineState::new(3);
        parse_position("position startpos moves 7g7f", &mut state).unwrap();
        let before = state.position.clone();

        assert!(parse_position("position startpos moves 7g7e", &mut state).is_err());
        assert!(parse_position("position startpos moves 5a5b", &mut state).is_err());
        assert!(parse_position("position startpos moves resign", &mut state).is_err());
        assert!(parse_position("position sfen bogus moves 7g7f", &mut state).is_err());
        assert!(parse_position("position", &mut state).is_err());
        let huge_hand = "position sfen 4k4/9/9/9/9/9/9/9/4K4 b 30000000P 1";
        assert!(parse_position(huge_hand, &mut state).is_err());
        let missing_ply = "position sfen 4k4/9/9/9/9/9/9/9/4K4 b -";
        assert!(parse_position(missing_ply, &mut state).is_err());
        assert_eq!(state.position, before);
    }

    #[test]
    fn test_parse_position_rejects_self_check() {
        let mut state = EngineState::new(3);
        let cmd = "position sfen k3r4/9/9/9/9/9/9/4G4/4K4 b - 1 moves 5h6h";
        assert!(parse_position(cmd, &mut state).is_err());
    }

    #[test]
    fn test_parse_go() {
        assert_eq!(parse_go("go").unwrap(), GoParams { depth: None });
        assert_eq!(parse_go("go depth 2").unwrap(), GoParams { depth: Some(2) });
        assert_eq!(
            parse_go("go btime 0 wtime 0 depth 20").unwrap(),
            GoParams { depth: Some(MAX_DEPTH) }
        );
        assert!(parse_go("go depth").is_err());
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Value::new(180)), "cp 200");
        assert_eq!(format_score(Value::INFINITE), "mate +");
        assert_eq!(format_score(-Value::INFINITE), "mate -");
    }
}
