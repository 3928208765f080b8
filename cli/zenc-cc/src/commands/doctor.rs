//! `zenc-cc doctor`: toolchain diagnostics.

use std::path::Path;

use anyhow::Result;
use zenc_cmd::{tokenize, CompilerConfig, IncludeTier};
use zenc_platform::Platform;

use crate::config::{ZencConfig, CONFIG_FILE};

/// Print toolchain diagnostic information.
pub fn run(project_dir: &Path, config: &CompilerConfig) -> Result<()> {
    println!("=== zenc-cc doctor ===");
    println!();
    println!("Version:  {}", env!("CARGO_PKG_VERSION"));
    println!("Platform: {}", Platform::HOST);
    println!();

    println!("--- C Compiler ---");
    let status = compiler_status(&config.cc);
    println!("  {}: {}", config.cc, status.describe());
    println!();

    println!("--- Standard Library ---");
    let exe_dir = zenc_os::executable_dir();
    let tier = IncludeTier::resolve(&exe_dir);
    println!("  tier: {tier:?}");
    println!("  root: {}", tier.root(&exe_dir));
    println!();

    println!("--- Configuration ---");
    match ZencConfig::find_and_load(project_dir) {
        Ok(Some((_, dir))) => println!("  {CONFIG_FILE}: found at {}", dir.display()),
        Ok(None) => println!("  {CONFIG_FILE}: not found"),
        Err(e) => println!("  {CONFIG_FILE}: error: {e:#}"),
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilerStatus {
    Available,
    Failed(i32),
    NotConfigured,
}

impl CompilerStatus {
    fn describe(&self) -> String {
        match self {
            CompilerStatus::Available => "available".to_string(),
            CompilerStatus::Failed(zenc_os::SPAWN_FAILED) => "not found".to_string(),
            CompilerStatus::Failed(code) => format!("--version exited with {code}"),
            CompilerStatus::NotConfigured => "no compiler configured".to_string(),
        }
    }
}

/// Run `<cc> --version`, honoring leading arguments in `cc` such as `zig cc`.
pub fn compiler_status(cc: &str) -> CompilerStatus {
    let mut argv = tokenize(cc);
    if argv.is_empty() {
        return CompilerStatus::NotConfigured;
    }
    argv.push("--version".to_string());
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    match zenc_os::run_command(&argv) {
        0 => CompilerStatus::Available,
        code => CompilerStatus::Failed(code),
    }
}
