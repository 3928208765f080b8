//! `zenc-cc compile`: assemble and run the C compiler command.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};
use zenc_cmd::{ArgList, CompileRequest, CompilerConfig, Invocation};
use zenc_platform::Platform;

#[derive(Debug, Default, Args)]
pub struct CompileArgs {
    /// Generated C source
    pub source: String,
    /// Output executable
    #[arg(short, long)]
    pub output: String,
    /// Extra C sources compiled alongside the generated file
    pub extra: Vec<String>,
    /// C compiler, optionally with leading arguments (e.g., "zig cc")
    #[arg(long)]
    pub cc: Option<String>,
    /// Flags passed on every compile
    #[arg(long, allow_hyphen_values = true)]
    pub flags: Option<String>,
    /// Build-mode flags (optimization, debug info)
    #[arg(long, allow_hyphen_values = true)]
    pub mode_flags: Option<String>,
    /// Linker flags
    #[arg(long, allow_hyphen_values = true)]
    pub link_flags: Option<String>,
    /// Build without the hosted C library
    #[arg(long)]
    pub freestanding: bool,
    /// Suppress C compiler warnings
    #[arg(long)]
    pub quiet: bool,
    /// Compile as C++
    #[arg(long)]
    pub cpp: bool,
    /// Link the threading library for async code
    #[arg(long = "async")]
    pub uses_async: bool,
    /// Assemble for another platform (e.g., windows-x86_64); implies --dry-run
    #[arg(long)]
    pub target: Option<String>,
    /// Print the command without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl CompileArgs {
    /// Layer command-line overrides onto the file configuration.
    pub fn apply(&self, mut config: CompilerConfig) -> CompilerConfig {
        if let Some(cc) = &self.cc {
            config.cc = cc.clone();
        }
        if let Some(flags) = &self.flags {
            config.flags = flags.clone();
        }
        if let Some(mode_flags) = &self.mode_flags {
            config.mode_flags = mode_flags.clone();
        }
        if let Some(link_flags) = &self.link_flags {
            config.link_flags = link_flags.clone();
        }
        config.c_files.extend(self.extra.iter().cloned());
        config.freestanding |= self.freestanding;
        config.quiet |= self.quiet;
        config.cpp |= self.cpp;
        config
    }

    fn request(&self) -> CompileRequest<'_> {
        CompileRequest {
            output: &self.output,
            source: &self.source,
            uses_async: self.uses_async,
        }
    }
}

/// Assemble the compiler argument vector for `args` on top of `config`.
pub fn assemble(config: &CompilerConfig, args: &CompileArgs) -> Result<ArgList> {
    let mut invocation = Invocation::new(config);
    if let Some(target) = &args.target {
        let platform: Platform = target
            .parse()
            .with_context(|| format!("invalid --target {target:?}"))?;
        invocation = invocation.target(platform);
    }
    Ok(invocation.build(&args.request()))
}

/// Returns the compiler's exit status.
pub fn run(config: CompilerConfig, args: CompileArgs) -> Result<i32> {
    let config = args.apply(config);
    let argv = assemble(&config, &args)?;
    let command = argv.to_command_text();

    if args.dry_run || args.target.is_some() {
        println!("{command}");
        return Ok(0);
    }

    info!(%command, "compiling {}", args.source);
    let start = zenc_os::monotonic_time();
    let code = argv.run();
    let elapsed = zenc_os::monotonic_time() - start;
    debug!(code, elapsed_ms = elapsed * 1000.0, "compiler finished");

    if code == zenc_os::SPAWN_FAILED {
        eprintln!("error: failed to run C compiler: {command}");
    } else if code != 0 {
        eprintln!("error: C compiler exited with status {code}");
    } else if !config.quiet {
        eprintln!("compiled {} in {elapsed:.3}s", args.output);
    }
    Ok(code)
}
