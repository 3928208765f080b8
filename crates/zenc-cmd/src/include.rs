//! Standard library include path discovery.
//!
//! The standard library is found relative to the running executable, in one
//! of three layouts probed in order:
//!
//! 1. **Development:** `<exe-dir>/std` exists (compiler run from its source tree)
//! 2. **Installed:** `<exe-dir>/../share/zenc/std` exists (`make install` layout)
//! 3. **Working directory:** neither exists; fall back to `.`
//!
//! The first existing tier wins. Tiers are never combined.

use std::path::Path;

use serde::Serialize;

use crate::config::CompilerConfig;

/// Installed share directory, relative to the executable directory.
pub const INSTALL_SHARE: &str = "../share/zenc";

/// Regex support headers, relative to a tier root.
pub const TRE_INCLUDE: &str = "std/third-party/tre/include";

/// One of the mutually exclusive standard library locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncludeTier {
    Development,
    Installed,
    WorkingDir,
}

impl IncludeTier {
    /// Probe the filesystem around `exe_dir`.
    pub fn resolve(exe_dir: &Path) -> Self {
        Self::resolve_with(exe_dir, Path::exists)
    }

    /// Probe with a custom existence check. An empty `exe_dir` (executable
    /// path unknown) skips straight to [`IncludeTier::WorkingDir`], as does a
    /// non-UTF-8 one, since include flags are rendered as text.
    pub fn resolve_with(exe_dir: &Path, exists: impl Fn(&Path) -> bool) -> Self {
        match exe_dir.to_str() {
            None | Some("") => return IncludeTier::WorkingDir,
            Some(_) => {}
        }
        if exists(&exe_dir.join("std")) {
            IncludeTier::Development
        } else if exists(&exe_dir.join(INSTALL_SHARE).join("std")) {
            IncludeTier::Installed
        } else {
            IncludeTier::WorkingDir
        }
    }

    /// Directory that contains `std/` for this tier.
    pub fn root(&self, exe_dir: &Path) -> String {
        let exe_dir = exe_dir.to_string_lossy();
        match self {
            IncludeTier::Development => exe_dir.into_owned(),
            IncludeTier::Installed => format!("{exe_dir}/{INSTALL_SHARE}"),
            IncludeTier::WorkingDir => ".".to_string(),
        }
    }

    /// `-I` flags for this tier. The regex headers are omitted for
    /// freestanding builds.
    pub fn flags(&self, exe_dir: &Path, freestanding: bool) -> Vec<String> {
        let root = self.root(exe_dir);
        let mut flags = vec![format!("-I{root}")];
        if !freestanding {
            flags.push(format!("-I{root}/{TRE_INCLUDE}"));
        }
        flags
    }
}

/// Directories searched for imports: configured include paths, then the
/// working directory, then the development and installed locations.
pub fn search_paths(config: &CompilerConfig, exe_dir: &Path) -> Vec<String> {
    let exe_dir = exe_dir.to_string_lossy();
    let mut paths = config.include_paths.clone();
    paths.push("./".to_string());
    paths.push(format!("{exe_dir}/std"));
    paths.push(format!("{exe_dir}/{INSTALL_SHARE}/std"));
    paths
}
