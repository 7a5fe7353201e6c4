// USI (Universal Shogi Interface) adapter

mod debug;
mod io;
mod options;
mod search;
mod state;

use std::io::{self as stdio, BufRead};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use debug::{handle_display, handle_generatemove, handle_sfen};
use io::{info_string, usi_println};
use options::{handle_setoption, send_id_and_options};
use search::{handle_go, parse_position};
use state::{EngineState, MAX_DEPTH};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Search depth used by `go` when no depth is given
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DEPTH as i64)
    )]
    depth: u32,
}

/// 1行分のコマンドを処理した結果
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_command(cmd: &str, state: &mut EngineState) -> Result<Flow> {
    let name = cmd.split_whitespace().next().unwrap_or("");
    match name {
        "usi" => {
            send_id_and_options(&state.opts);
            usi_println("usiok");
        }
        "isready" => usi_println("readyok"),
        "usinewgame" => {}
        "setoption" => handle_setoption(cmd, state)?,
        "position" => parse_position(cmd, state)?,
        "go" => handle_go(cmd, state)?,
        "generatemove" => handle_generatemove(cmd, state)?,
        "d" => handle_display(cmd, state)?,
        "sfen" => handle_sfen(state),
        "quit" => return Ok(Flow::Quit),
        _ => info!("Ignoring command: {cmd}"),
    }
    Ok(Flow::Continue)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    use std::io::Write;
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    info!("simple-shogi-usi started (depth={})", args.depth);

    let mut state = EngineState::new(args.depth);
    let stdin = stdio::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match handle_command(cmd, &mut state) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                // 不正な入力でも応答ループは止めない
                warn!("command failed: {cmd}: {e:#}");
                info_string(format!("error {e:#}"));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_depth() {
        let args = Args::parse_from(["simple-shogi-usi"]);
        assert_eq!(args.depth, 3);
        assert!(!args.debug);

        let args = Args::parse_from(["simple-shogi-usi", "--depth", "5", "-d"]);
        assert_eq!(args.depth, 5);
        assert!(args.debug);

        assert!(Args::try_parse_from(["simple-shogi-usi", "--depth", "0"]).is_err());
    }

    #[test]
    fn test_handle_command_flow() {
        let mut state = EngineState::new(1);
        assert_eq!(handle_command("usinewgame", &mut state).unwrap(), Flow::Continue);
        assert_eq!(handle_command("unknown command", &mut state).unwrap(), Flow::Continue);
        assert_eq!(handle_command("quit", &mut state).unwrap(), Flow::Quit);
        assert!(handle_command("position nowhere", &mut state).is_err());
    }
}
