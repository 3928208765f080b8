//! Compiler invocation configuration.

use serde::{Deserialize, Serialize};

/// Settings for the external C compiler, supplied by the driver.
///
/// Read-only to this crate. Flag strings are split with
/// [`crate::tokenize`] when the command is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CompilerConfig {
    /// Compiler executable, optionally with leading arguments (e.g., "zig cc").
    pub cc: String,
    /// Flags passed on every compile.
    pub flags: String,
    /// Flags for the current build mode (optimization, debug info).
    pub mode_flags: String,
    /// Extra C sources compiled alongside the generated file.
    pub c_files: Vec<String>,
    /// Build without the hosted C library.
    pub freestanding: bool,
    /// Suppress C compiler warnings.
    pub quiet: bool,
    /// Compile the generated code as C++.
    pub cpp: bool,
    /// Linker flags, appended after the platform libraries.
    pub link_flags: String,
    /// User include directories, listed by [`crate::search_paths`].
    pub include_paths: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            cc: "gcc".to_string(),
            flags: String::new(),
            mode_flags: String::new(),
            c_files: Vec::new(),
            freestanding: false,
            quiet: false,
            cpp: false,
            link_flags: String::new(),
            include_paths: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CompilerConfig::default();
        assert_eq!(config.cc, "gcc");
        assert!(config.c_files.is_empty());
        assert!(!config.freestanding);
    }

    #[test]
    fn parses_partial_toml() {
        let config: CompilerConfig = toml::from_str(
            r#"
cc = "clang"
mode-flags = "-O2 -g"
c-files = ["vendor/sqlite3.c"]
freestanding = true
"#,
        )
        .unwrap();
        assert_eq!(config.cc, "clang");
        assert_eq!(config.mode_flags, "-O2 -g");
        assert_eq!(config.c_files, vec!["vendor/sqlite3.c"]);
        assert!(config.freestanding);
        assert!(!config.quiet);
        assert_eq!(config.link_flags, "");
    }
}
