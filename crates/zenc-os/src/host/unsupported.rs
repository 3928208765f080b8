//! Host for targets without processes or a console (e.g., bare wasm).

use super::Host;
use crate::exec::SPAWN_FAILED;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedHost;

impl Host for UnsupportedHost {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn enable_virtual_terminal(&self) {}

    fn is_tty(&self, _fd: i32) -> bool {
        false
    }

    fn raw_temp_dir(&self) -> Option<String> {
        None
    }

    fn temp_dir_fallback(&self) -> &'static str {
        "/tmp"
    }

    fn run_command(&self, _argv: &[&str]) -> i32 {
        SPAWN_FAILED
    }
}
