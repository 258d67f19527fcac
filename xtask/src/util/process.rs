//! Running external tools with the terminal attached.

use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to spawn '{command}'")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("'{command}' exited with status {code}")]
    Failed { command: String, code: i32 },

    #[error("'{command}' was terminated by a signal")]
    Terminated { command: String },
}

/// Program and arguments joined by spaces, for diagnostics only.
pub fn display_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `cmd` to completion with stdout/stderr passed straight through.
///
/// `Command::status` waits on the child, so it is reaped on every return path.
/// There is no timeout: a hung tool hangs the run.
pub fn run_cmd(cmd: &mut Command) -> Result<(), CommandError> {
    let command = display_command(cmd);
    debug!(%command, "running");

    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| CommandError::Spawn {
            command: command.clone(),
            source,
        })?;

    match status.code() {
        Some(0) => Ok(()),
        Some(code) => Err(CommandError::Failed { command, code }),
        None => Err(CommandError::Terminated { command }),
    }
}
