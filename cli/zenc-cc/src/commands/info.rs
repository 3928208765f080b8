//! `zenc-cc info`: host platform facts.

use anyhow::Result;
use serde::Serialize;
use zenc_platform::{conventions, system_name, Platform, POINTER_WIDTH};

#[derive(Debug, Serialize)]
pub struct HostInfo {
    pub platform: Platform,
    pub system: &'static str,
    pub pointer_width: usize,
    pub exe_extension: &'static str,
    pub plugin_extension: &'static str,
    pub exe_path: String,
    pub temp_dir: &'static str,
    pub pid: u32,
    pub tty: TtyStatus,
}

#[derive(Debug, Serialize)]
pub struct TtyStatus {
    pub stdin: bool,
    pub stdout: bool,
    pub stderr: bool,
}

impl HostInfo {
    pub fn collect() -> Self {
        let platform = Platform::HOST;
        Self {
            platform,
            system: system_name(),
            pointer_width: POINTER_WIDTH,
            exe_extension: conventions::exe_extension(platform.os),
            plugin_extension: conventions::plugin_extension(platform.os),
            exe_path: zenc_os::executable_path().to_string_lossy().into_owned(),
            temp_dir: zenc_os::temp_dir(),
            pid: zenc_os::pid(),
            tty: TtyStatus {
                stdin: zenc_os::is_tty(zenc_os::STDIN_FD),
                stdout: zenc_os::is_tty(zenc_os::STDOUT_FD),
                stderr: zenc_os::is_tty(zenc_os::STDERR_FD),
            },
        }
    }
}

pub fn run(json: bool) -> Result<()> {
    let info = HostInfo::collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let facts = info.platform.os_facts();
    println!("Platform:      {}", info.platform);
    println!("System:        {}", info.system);
    println!(
        "Groups:        unix={} bsd={} posix={}",
        facts.unix(),
        facts.bsd(),
        facts.posix()
    );
    println!("Pointer width: {} bytes", info.pointer_width);
    println!("Executables:   *{}", info.exe_extension);
    println!("Plugins:       *{}", info.plugin_extension);
    if info.exe_path.is_empty() {
        println!("Executable:    (unknown)");
    } else {
        println!("Executable:    {}", info.exe_path);
    }
    println!("Temp dir:      {}", info.temp_dir);
    println!("PID:           {}", info.pid);
    println!(
        "TTY:           stdin={} stdout={} stderr={}",
        info.tty.stdin, info.tty.stdout, info.tty.stderr
    );
    Ok(())
}
