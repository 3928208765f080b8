//! Temporary directory and anonymous temporary files.

use std::fs::File;
use std::io;
use std::sync::OnceLock;

use crate::host::{Host, NativeHost};

static TEMP_DIR: OnceLock<String> = OnceLock::new();

/// The process temporary directory, with `/` separators and no trailing
/// slash.
///
/// Resolved once on first use and cached for the life of the process.
pub fn temp_dir() -> &'static str {
    TEMP_DIR.get_or_init(|| resolve_temp_dir(&NativeHost::default()))
}

/// Resolve the temporary directory for `host` without caching.
pub fn resolve_temp_dir(host: &impl Host) -> String {
    host.raw_temp_dir()
        .and_then(|raw| normalize_temp_dir(&raw))
        .unwrap_or_else(|| host.temp_dir_fallback().to_string())
}

/// Convert `\` to `/` and strip trailing slashes. `None` if nothing is left.
pub fn normalize_temp_dir(raw: &str) -> Option<String> {
    let normalized = raw.replace('\\', "/");
    let trimmed = normalized.trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// An anonymous read/write file that is removed when closed.
pub fn temp_file() -> io::Result<File> {
    tempfile::tempfile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom, Write};

    struct FixedHost(Option<&'static str>);

    impl Host for FixedHost {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn enable_virtual_terminal(&self) {}
        fn is_tty(&self, _fd: i32) -> bool {
            false
        }
        fn raw_temp_dir(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
        fn temp_dir_fallback(&self) -> &'static str {
            "C:/Windows/Temp"
        }
        fn run_command(&self, _argv: &[&str]) -> i32 {
            crate::SPAWN_FAILED
        }
    }

    #[test]
    fn normalizes_windows_paths() {
        assert_eq!(
            normalize_temp_dir("C:\\Users\\me\\AppData\\Local\\Temp\\").as_deref(),
            Some("C:/Users/me/AppData/Local/Temp")
        );
        assert_eq!(normalize_temp_dir("/tmp/").as_deref(), Some("/tmp"));
        assert_eq!(normalize_temp_dir("/var/tmp").as_deref(), Some("/var/tmp"));
        assert_eq!(normalize_temp_dir(""), None);
        assert_eq!(normalize_temp_dir("\\"), None);
    }

    #[test]
    fn falls_back_when_os_reports_nothing() {
        assert_eq!(resolve_temp_dir(&FixedHost(None)), "C:/Windows/Temp");
        assert_eq!(resolve_temp_dir(&FixedHost(Some("/"))), "C:/Windows/Temp");
        assert_eq!(resolve_temp_dir(&FixedHost(Some("D:\\tmp\\"))), "D:/tmp");
    }

    #[test]
    fn cached_dir_is_stable() {
        let first = temp_dir();
        assert!(!first.is_empty());
        assert!(!first.ends_with('/'));
        assert!(!first.contains('\\'));
        assert!(std::ptr::eq(first, temp_dir()));
    }

    #[test]
    fn temp_file_is_read_write() {
        let mut file = temp_file().unwrap();
        file.write_all(b"int main(void) { return 0; }").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut back = String::new();
        file.read_to_string(&mut back).unwrap();
        assert!(back.starts_with("int main"));
    }
}
