//! Facts about the running process.

use std::path::PathBuf;

use tracing::debug;

/// Current process id.
pub fn pid() -> u32 {
    std::process::id()
}

/// Absolute path of the running executable.
///
/// Best effort: platforms without a reliable self-path API yield an empty
/// path rather than an error.
pub fn executable_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            debug!(error = %e, "executable path unavailable");
            PathBuf::new()
        }
    }
}

/// Directory containing the running executable, or an empty path when the
/// executable path is unknown.
pub fn executable_dir() -> PathBuf {
    executable_path()
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pid_is_nonzero() {
        assert_ne!(pid(), 0);
        assert_eq!(pid(), pid());
    }

    #[test]
    fn executable_dir_contains_executable() {
        let exe = executable_path();
        if exe.as_os_str().is_empty() {
            assert!(executable_dir().as_os_str().is_empty());
        } else {
            assert!(exe.is_absolute());
            assert_eq!(exe.parent().unwrap(), executable_dir());
        }
    }
}
