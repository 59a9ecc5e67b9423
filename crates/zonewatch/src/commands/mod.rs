//! Command dispatch: bridges CLI args -> core checker -> output formatting.

pub mod check;
pub mod config_cmd;
pub mod zones;

use crate::cli::{Command, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;

/// Dispatch a snapshot-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, config: &Config, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Check(args) => check::handle(&args, config, global).await,
        Command::Zones => zones::handle(config, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not need a snapshot and is handled before dispatch".into(),
        )),
    }
}
