//! Shell-free command execution.

use std::io;
use std::process::ExitStatus;

use tracing::debug;

use crate::host::{Host, NativeHost};

/// Status returned when a child could not be created or was terminated
/// abnormally (e.g., by a signal).
pub const SPAWN_FAILED: i32 = -1;

/// Run `argv[0]` with `argv[1..]` as discrete arguments on the native host
/// and return its exit status.
///
/// No command interpreter is involved, so shell metacharacters in arguments
/// are passed through literally. Blocks until the child exits; there is no
/// timeout. An empty `argv` returns [`SPAWN_FAILED`].
pub fn run_command(argv: &[&str]) -> i32 {
    NativeHost::default().run_command(argv)
}

/// Map the outcome of waiting on a child to an exit status.
#[cfg_attr(not(any(unix, windows)), allow(dead_code))]
pub(crate) fn exit_code(program: &str, outcome: io::Result<ExitStatus>) -> i32 {
    match outcome {
        Ok(status) => match status.code() {
            Some(code) => {
                debug!(program, code, "child exited");
                code
            }
            None => {
                debug!(program, %status, "child terminated abnormally");
                SPAWN_FAILED
            }
        },
        Err(e) => {
            debug!(program, error = %e, "failed to create child process");
            SPAWN_FAILED
        }
    }
}
