//! Per-OS implementations of the operating system services.
//!
//! [`Host`] is implemented once per OS family. [`NativeHost`] names the
//! implementation for the build target; callers that want a different one
//! (tests, cross-target tooling) pass a `&impl Host` explicitly.

#[cfg(unix)]
mod posix;
#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(windows)]
mod win;

#[cfg(unix)]
pub use posix::PosixHost;
#[cfg(not(any(unix, windows)))]
pub use unsupported::UnsupportedHost;
#[cfg(windows)]
pub use win::WindowsHost;

/// The host implementation for the build target.
#[cfg(unix)]
pub type NativeHost = PosixHost;
/// The host implementation for the build target.
#[cfg(windows)]
pub type NativeHost = WindowsHost;
/// The host implementation for the build target.
#[cfg(not(any(unix, windows)))]
pub type NativeHost = UnsupportedHost;

/// Operating system services that differ between OS families.
pub trait Host {
    /// Short name of the implementation, for diagnostics.
    fn name(&self) -> &'static str;

    /// Opt standard output and standard error into ANSI escape processing.
    ///
    /// Does nothing where escapes are native or the console is unavailable.
    fn enable_virtual_terminal(&self);

    /// Whether `fd` is connected to an interactive terminal.
    fn is_tty(&self, fd: i32) -> bool;

    /// Temporary directory as reported by the OS, before normalization.
    fn raw_temp_dir(&self) -> Option<String>;

    /// Temporary directory used when the OS reports none.
    fn temp_dir_fallback(&self) -> &'static str;

    /// Run `argv[0]` with the remaining elements as its arguments, without a
    /// command interpreter, and wait for it.
    ///
    /// Returns the exit code, or [`crate::SPAWN_FAILED`] if the process could
    /// not be created or did not exit normally.
    fn run_command(&self, argv: &[&str]) -> i32;
}

/// Reads the temp directory through `std`, which consults `TMPDIR` on POSIX
/// and `GetTempPath2W` on Windows.
#[cfg_attr(not(any(unix, windows)), allow(dead_code))]
fn std_temp_dir() -> Option<String> {
    let dir = std::env::temp_dir();
    let dir = dir.to_str()?;
    (!dir.is_empty()).then(|| dir.to_string())
}
