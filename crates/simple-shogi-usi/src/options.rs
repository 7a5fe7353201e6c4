use anyhow::{bail, Context, Result};
use log::info;

use crate::io::usi_println;
use crate::state::{EngineState, UsiOptions, MAX_DEPTH};

pub fn send_id_and_options(opts: &UsiOptions) {
    usi_println("id name SimpleShogiEngine");
    usi_println("id author simple-shogi developers");
    usi_println(&format!(
        "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
        opts.depth
    ));
}

/// `setoption name <name> [value <value>]`
pub fn handle_setoption(cmd: &str, state: &mut EngineState) -> Result<()> {
    let body = cmd.strip_prefix("setoption").unwrap_or("").trim();
    let Some(after_name) = body.strip_prefix("name") else {
        bail!("setoption without name: {cmd:?}");
    };
    let after_name = after_name.trim_start();

    let (name, value) = match after_name.find(" value ") {
        Some(value_pos) => {
            (after_name[..value_pos].trim(), Some(after_name[value_pos + 7..].trim()))
        }
        None => (after_name.trim(), None),
    };

    match name {
        "Depth" => {
            let value = value.context("Depth requires a value")?;
            let depth: u32 =
                value.parse().with_context(|| format!("invalid Depth value {value:?}"))?;
            if !(1..=MAX_DEPTH).contains(&depth) {
                bail!("Depth must be between 1 and {MAX_DEPTH}, got {depth}");
            }
            state.opts.depth = depth;
            info!("Depth set to {depth}");
        }
        other => info!("Ignoring unknown option: {other}"),
    }
    Ok(())
}
