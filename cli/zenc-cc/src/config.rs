//! `zenc.toml` discovery and parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use zenc_cmd::CompilerConfig;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE: &str = "zenc.toml";

/// The top-level `zenc.toml` structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZencConfig {
    /// C compiler settings.
    #[serde(default)]
    pub compiler: CompilerConfig,
}

impl ZencConfig {
    /// Search upward from `start_dir` for a `zenc.toml`, parse it, and return
    /// it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Load `zenc.toml` from `start_dir` or an ancestor, or defaults if none.
pub fn load_or_default(start_dir: &Path) -> Result<ZencConfig> {
    match ZencConfig::find_and_load(start_dir)? {
        Some((config, dir)) => {
            tracing::debug!(dir = %dir.display(), "loaded {CONFIG_FILE}");
            Ok(config)
        }
        None => Ok(ZencConfig::default()),
    }
}
