//! `zenc-cc paths`: import search directories.

use anyhow::Result;
use zenc_cmd::{search_paths, CompilerConfig, IncludeTier};

pub fn run(config: &CompilerConfig) -> Result<()> {
    let exe_dir = zenc_os::executable_dir();
    let tier = IncludeTier::resolve(&exe_dir);

    println!("Standard library: {tier:?} ({})", tier.root(&exe_dir));
    println!("Search paths:");
    for (i, path) in search_paths(config, &exe_dir).iter().enumerate() {
        println!("  {}. {path}", i + 1);
    }
    Ok(())
}
