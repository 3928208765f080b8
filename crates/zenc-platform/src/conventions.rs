//! Per-OS path and file naming conventions.

use crate::os::OsFamily;

/// Whether `path` is absolute under the rules of `os`.
///
/// A leading `/` is absolute everywhere. Windows also accepts a leading `\`
/// and a drive prefix such as `C:`.
pub fn is_absolute_path(path: &str, os: OsFamily) -> bool {
    let bytes = path.as_bytes();
    match bytes.first() {
        None => false,
        Some(b'/') => true,
        Some(b'\\') if os.is_windows() => true,
        Some(c) if os.is_windows() => c.is_ascii_alphabetic() && bytes.get(1) == Some(&b':'),
        Some(_) => false,
    }
}

/// Byte index of the last path separator in `path`.
pub fn last_separator(path: &str, os: OsFamily) -> Option<usize> {
    let slash = path.rfind('/');
    if !os.is_windows() {
        return slash;
    }
    match (slash, path.rfind('\\')) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// Extension given to compiled executables.
pub const fn exe_extension(os: OsFamily) -> &'static str {
    if os.is_windows() {
        ".exe"
    } else {
        ".bin"
    }
}

/// Extension of loadable compiler plugins.
pub const fn plugin_extension(os: OsFamily) -> &'static str {
    if os.is_windows() {
        ".dll"
    } else {
        ".so"
    }
}

/// Prefix needed to run an executable from the working directory.
pub const fn run_prefix(os: OsFamily) -> &'static str {
    if os.is_windows() {
        ""
    } else {
        "./"
    }
}
