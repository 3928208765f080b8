//! zenc-cc: drives the external C compiler for generated zenc sources.

mod commands;
mod config;
mod logging;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use commands::compile::CompileArgs;

#[derive(Parser)]
#[command(name = "zenc-cc", version, about = "C backend driver for the zenc toolchain")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show host platform facts
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the import search paths
    Paths,
    /// Check the configured C compiler
    Doctor,
    /// Compile a generated C source with the configured compiler
    Compile(CompileArgs),
}

fn main() {
    let cli = Cli::parse();

    zenc_os::enable_ansi();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

/// Run the selected command and return the process exit code.
fn run(cli: Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;
    run_in(&cwd, cli.command)
}

/// Run `command` with `cwd` as the starting point for `zenc.toml` discovery.
/// Only commands that use the compiler settings read the file.
fn run_in(cwd: &Path, command: Commands) -> anyhow::Result<i32> {
    match command {
        Commands::Info { json } => commands::info::run(json).map(|()| 0),
        Commands::Paths => {
            let file = config::load_or_default(cwd)?;
            commands::paths::run(&file.compiler).map(|()| 0)
        }
        Commands::Doctor => {
            // Doctor reports a broken zenc.toml instead of failing on it.
            let compiler = config::load_or_default(cwd)
                .map(|file| file.compiler)
                .unwrap_or_default();
            commands::doctor::run(cwd, &compiler).map(|()| 0)
        }
        Commands::Compile(args) => {
            let file = config::load_or_default(cwd)?;
            commands::compile::run(file.compiler, args)
        }
    }
}
