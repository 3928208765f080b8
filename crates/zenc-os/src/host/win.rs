//! Windows host.
//!
//! Process creation on Windows takes a single command line, so arguments are
//! re-quoted with [`crate::quote`] before the child is created.

use std::os::windows::process::CommandExt;
use std::process::Command;

use tracing::debug;
use ::windows::Win32::System::Console::{
    GetConsoleMode, GetStdHandle, SetConsoleMode, CONSOLE_MODE,
    ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_ERROR_HANDLE, STD_HANDLE, STD_OUTPUT_HANDLE,
};

use super::Host;
use crate::exec::{exit_code, SPAWN_FAILED};
use crate::quote::join_command_line;

/// Host services for Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsHost;

/// Set `ENABLE_VIRTUAL_TERMINAL_PROCESSING` on one standard handle.
fn enable_vt_on(which: STD_HANDLE) -> bool {
    // SAFETY: the handle comes straight from GetStdHandle and is checked
    // before use; the console calls only read and write its mode.
    unsafe {
        let Ok(handle) = GetStdHandle(which) else {
            return false;
        };
        if handle.is_invalid() {
            return false;
        }
        let mut mode = CONSOLE_MODE::default();
        if GetConsoleMode(handle, &mut mode).is_err() {
            return false;
        }
        SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING).is_ok()
    }
}

impl Host for WindowsHost {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn enable_virtual_terminal(&self) {
        // Each handle is tried on its own: stdout may be piped while stderr
        // is still a console.
        for which in [STD_OUTPUT_HANDLE, STD_ERROR_HANDLE] {
            let enabled = enable_vt_on(which);
            debug!(handle = which.0, enabled, "virtual terminal processing");
        }
    }

    fn is_tty(&self, fd: i32) -> bool {
        if fd < 0 {
            return false;
        }
        // SAFETY: _isatty only inspects the CRT descriptor table and returns
        // 0 for descriptors that are not open.
        unsafe { libc::isatty(fd) != 0 }
    }

    fn raw_temp_dir(&self) -> Option<String> {
        super::std_temp_dir()
    }

    fn temp_dir_fallback(&self) -> &'static str {
        "C:/Windows/Temp"
    }

    fn run_command(&self, argv: &[&str]) -> i32 {
        let Some((program, args)) = argv.split_first() else {
            return SPAWN_FAILED;
        };
        let line = join_command_line(args);
        debug!(program, %line, "spawning");
        let mut command = Command::new(program);
        if !line.is_empty() {
            command.raw_arg(&line);
        }
        exit_code(program, command.status())
    }
}
