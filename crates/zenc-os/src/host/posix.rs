//! POSIX-family host: Linux, macOS, the BSDs, Android, Cygwin.

use std::process::Command;

use tracing::debug;

use super::Host;
use crate::exec::{exit_code, SPAWN_FAILED};

/// Host services for POSIX-family systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixHost;

impl Host for PosixHost {
    fn name(&self) -> &'static str {
        "posix"
    }

    fn enable_virtual_terminal(&self) {
        // ANSI escapes are native.
    }

    fn is_tty(&self, fd: i32) -> bool {
        // SAFETY: isatty only inspects the descriptor and reports EBADF for
        // descriptors that are not open.
        unsafe { libc::isatty(fd) == 1 }
    }

    fn raw_temp_dir(&self) -> Option<String> {
        super::std_temp_dir()
    }

    fn temp_dir_fallback(&self) -> &'static str {
        "/tmp"
    }

    fn run_command(&self, argv: &[&str]) -> i32 {
        let Some((program, args)) = argv.split_first() else {
            return SPAWN_FAILED;
        };
        debug!(program, ?args, "spawning");
        // std forks (or posix_spawns) and execs directly; the child never
        // sees a shell.
        let outcome = Command::new(program).args(args).status();
        exit_code(program, outcome)
    }
}
