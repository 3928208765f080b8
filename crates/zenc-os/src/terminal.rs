//! Terminal detection and setup.

use crate::host::{Host, NativeHost};

pub const STDIN_FD: i32 = 0;
pub const STDOUT_FD: i32 = 1;
pub const STDERR_FD: i32 = 2;

/// Enable ANSI escape processing on stdout and stderr where the OS needs an
/// explicit opt-in. Never fails observably.
pub fn enable_ansi() {
    NativeHost::default().enable_virtual_terminal();
}

/// Whether `fd` is an interactive terminal.
pub fn is_tty(fd: i32) -> bool {
    NativeHost::default().is_tty(fd)
}
