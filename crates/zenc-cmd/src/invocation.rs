//! C compiler command line assembly.
//!
//! [`Invocation::build`] produces the argument vector for one compile of a
//! generated C file. The order is fixed:
//!
//! 1. compiler
//! 2. global flags, then build-mode flags
//! 3. `-ffreestanding` (freestanding)
//! 4. `-w` (quiet)
//! 5. `-fpermissive -Wno-write-strings` (C++ mode)
//! 6. `-o <output>`
//! 7. generated source, then extra C sources in configured order
//! 8. platform libraries: `-lm` and, when async is used, `-lpthread` on hosted
//!    non-Windows targets; `-lws2_32` on Windows
//! 9. linker flags
//! 10. standard library include flags for the first existing [`IncludeTier`]

use std::path::{Path, PathBuf};

use tracing::debug;
use zenc_platform::Platform;

use crate::arg_list::ArgList;
use crate::config::CompilerConfig;
use crate::include::IncludeTier;

/// Per-compile inputs from the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileRequest<'a> {
    /// Path given to `-o`.
    pub output: &'a str,
    /// The generated C source.
    pub source: &'a str,
    /// The program uses async, so the threading library is linked.
    pub uses_async: bool,
}

/// Builder for a compiler argument vector.
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    config: &'a CompilerConfig,
    target: Platform,
    exe_dir: PathBuf,
    tier: Option<IncludeTier>,
}

impl<'a> Invocation<'a> {
    /// An invocation for the host platform, locating the standard library
    /// relative to the running executable.
    pub fn new(config: &'a CompilerConfig) -> Self {
        Self {
            config,
            target: Platform::HOST,
            exe_dir: zenc_os::executable_dir(),
            tier: None,
        }
    }

    /// Assemble for `target` instead of the host.
    pub fn target(mut self, target: Platform) -> Self {
        self.target = target;
        self
    }

    /// Resolve include tiers relative to `dir` instead of the executable's
    /// directory.
    pub fn exe_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exe_dir = dir.into();
        self
    }

    /// Use `tier` without probing the filesystem.
    pub fn include_tier(mut self, tier: IncludeTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn exe_dir_path(&self) -> &Path {
        &self.exe_dir
    }

    /// The include tier this invocation uses.
    pub fn resolved_tier(&self) -> IncludeTier {
        self.tier.unwrap_or_else(|| IncludeTier::resolve(&self.exe_dir))
    }

    /// Assemble the full compiler argument vector.
    pub fn build(&self, request: &CompileRequest<'_>) -> ArgList {
        let config = self.config;
        let mut args = ArgList::new();

        args.add_from_string(&config.cc);
        args.add_from_string(&config.flags);
        args.add_from_string(&config.mode_flags);

        if config.freestanding {
            args.push("-ffreestanding");
        }
        if config.quiet {
            args.push("-w");
        }
        if config.cpp {
            args.push("-fpermissive");
            args.push("-Wno-write-strings");
        }

        args.push("-o");
        args.push(request.output);

        args.push(request.source);
        args.extend(config.c_files.iter().map(String::as_str));

        self.push_platform_libraries(&mut args, request.uses_async);

        args.add_from_string(&config.link_flags);

        let tier = self.resolved_tier();
        debug!(?tier, exe_dir = %self.exe_dir.display(), "standard library include tier");
        args.extend(tier.flags(&self.exe_dir, config.freestanding));

        args
    }

    fn push_platform_libraries(&self, args: &mut ArgList, uses_async: bool) {
        if self.target.is_windows() {
            args.push("-lws2_32");
        } else if !self.config.freestanding {
            args.push("-lm");
            if uses_async {
                args.push("-lpthread");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenc_platform::{Arch, OsFamily};

    const LINUX: Platform = Platform::new(OsFamily::Linux, Arch::X64);
    const WINDOWS: Platform = Platform::new(OsFamily::Windows, Arch::X64);

    fn request(uses_async: bool) -> CompileRequest<'static> {
        CompileRequest {
            output: "app.bin",
            source: "/tmp/zenc/out.c",
            uses_async,
        }
    }

    fn build(config: &CompilerConfig, target: Platform, uses_async: bool) -> Vec<String> {
        Invocation::new(config)
            .target(target)
            .exe_dir("/opt/zenc/bin")
            .include_tier(IncludeTier::Development)
            .build(&request(uses_async))
            .to_vec()
    }

    #[test]
    fn full_order() {
        let config = CompilerConfig {
            cc: "zig cc".into(),
            flags: "-std=c11 -DNAME=\"my app\"".into(),
            mode_flags: "-O2 -g".into(),
            c_files: vec!["a.c".into(), "b.c".into()],
            freestanding: false,
            quiet: true,
            cpp: true,
            link_flags: "-L/usr/lib -lsqlite3".into(),
            include_paths: vec![],
        };
        assert_eq!(
            build(&config, LINUX, true),
            vec![
                "zig",
                "cc",
                "-std=c11",
                "-DNAME=my app",
                "-O2",
                "-g",
                "-w",
                "-fpermissive",
                "-Wno-write-strings",
                "-o",
                "app.bin",
                "/tmp/zenc/out.c",
                "a.c",
                "b.c",
                "-lm",
                "-lpthread",
                "-L/usr/lib",
                "-lsqlite3",
                "-I/opt/zenc/bin",
                "-I/opt/zenc/bin/std/third-party/tre/include",
            ]
        );
    }

    #[test]
    fn minimal_config() {
        let config = CompilerConfig::default();
        assert_eq!(
            build(&config, LINUX, false),
            vec![
                "gcc",
                "-o",
                "app.bin",
                "/tmp/zenc/out.c",
                "-lm",
                "-I/opt/zenc/bin",
                "-I/opt/zenc/bin/std/third-party/tre/include",
            ]
        );
    }

    #[test]
    fn posix_target_links_math_and_threads() {
        let args = build(&CompilerConfig::default(), LINUX, true);
        assert!(args.iter().any(|a| a == "-lm"));
        assert!(args.iter().any(|a| a == "-lpthread"));
        assert!(!args.iter().any(|a| a == "-lws2_32"));
    }

    #[test]
    fn windows_target_links_sockets_only() {
        let args = build(&CompilerConfig::default(), WINDOWS, true);
        assert!(args.iter().any(|a| a == "-lws2_32"));
        assert!(!args.iter().any(|a| a == "-lm"));
        assert!(!args.iter().any(|a| a == "-lpthread"));
    }

    #[test]
    fn freestanding_skips_libraries_and_regex() {
        let config = CompilerConfig {
            freestanding: true,
            ..CompilerConfig::default()
        };
        let args = build(&config, LINUX, true);
        assert_eq!(args[1], "-ffreestanding");
        assert!(!args.iter().any(|a| a == "-lm" || a == "-lpthread"));
        assert_eq!(args.last().map(String::as_str), Some("-I/opt/zenc/bin"));
    }

    #[test]
    fn output_precedes_inputs() {
        let config = CompilerConfig {
            c_files: vec!["extra.c".into()],
            ..CompilerConfig::default()
        };
        let args = build(&config, LINUX, false);
        let o = args.iter().position(|a| a == "-o").unwrap();
        assert_eq!(args[o + 1], "app.bin");
        assert_eq!(args[o + 2], "/tmp/zenc/out.c");
        assert_eq!(args[o + 3], "extra.c");
    }

    #[test]
    fn pinned_tier_skips_probe() {
        let config = CompilerConfig::default();
        let invocation = Invocation::new(&config)
            .exe_dir("/nonexistent")
            .include_tier(IncludeTier::Installed);
        assert_eq!(invocation.resolved_tier(), IncludeTier::Installed);
        assert_eq!(invocation.exe_dir_path(), Path::new("/nonexistent"));
    }
}
