//! Command assembly for the zenc toolchain.
//!
//! Turns compiler configuration and a generated C source file into an
//! argument vector for the external C compiler, and runs it through the
//! shell-free spawn primitive in `zenc-os`.
//!
//! - [`CommandText`]: space-joined rendering of a command, for display only
//! - [`ArgList`]: owned argument vector with a trailing null slot
//! - [`tokenize`]: flag-string splitting with double-quote grouping
//! - [`Invocation`]: the fixed-order compiler command line
//! - [`IncludeTier`]: standard-library include path discovery

pub mod arg_list;
pub mod command_text;
pub mod config;
pub mod error;
pub mod include;
pub mod invocation;
pub mod tokenize;

pub use arg_list::ArgList;
pub use command_text::CommandText;
pub use config::CompilerConfig;
pub use error::{CmdError, Result};
pub use include::{search_paths, IncludeTier};
pub use invocation::{CompileRequest, Invocation};
pub use tokenize::{tokenize, try_tokenize, MAX_TOKEN_LEN};
