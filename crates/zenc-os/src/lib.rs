//! Operating system services for the zenc toolchain.
//!
//! Everything that differs between operating systems sits behind the
//! [`Host`] trait, with one implementation per OS family and [`NativeHost`]
//! chosen at build time. The free functions in this crate delegate to the
//! native host.
//!
//! Failures never abort: unavailable facts degrade to documented fallbacks
//! (empty executable path, fallback temp directory) and failed resources are
//! reported as `None` or [`SPAWN_FAILED`].

pub mod clock;
pub mod dylib;
pub mod exec;
pub mod host;
pub mod process;
pub mod quote;
pub mod temp;
pub mod terminal;

pub use clock::{monotonic_time, wall_time};
pub use dylib::Library;
pub use exec::{run_command, SPAWN_FAILED};
pub use host::{Host, NativeHost};
pub use process::{executable_dir, executable_path, pid};
pub use temp::{temp_dir, temp_file};
pub use terminal::{enable_ansi, is_tty, STDERR_FD, STDIN_FD, STDOUT_FD};
