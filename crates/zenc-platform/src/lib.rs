//! Compile-time platform identity for the zenc toolchain.
//!
//! Every fact in this crate is fixed when the crate is built:
//! - **Operating system family:** exactly one of [`OsFamily`] is the host,
//!   with derived `unix`/`bsd`/`posix` groups in [`OsFacts`]
//! - **CPU architecture:** exactly one of [`Arch`] is the host, with derived
//!   width and family groups in [`ArchFacts`]
//! - **Conventions:** path separators, executable and plugin extensions
//!
//! Building for a target outside the supported families is a compile error.

pub mod arch;
pub mod conventions;
pub mod error;
pub mod os;
pub mod platform;

pub use arch::{arch_name, Arch, ArchFacts, POINTER_WIDTH};
pub use error::{PlatformError, Result};
pub use os::{matches_host_os, os_name, system_name, OsFacts, OsFamily};
pub use platform::Platform;
