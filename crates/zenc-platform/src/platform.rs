//! Operating system plus architecture.
//!
//! The invocation assembler takes a [`Platform`] rather than reading host
//! facts directly, so a build can be assembled for another target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arch::{Arch, ArchFacts};
use crate::error::PlatformError;
use crate::os::{OsFacts, OsFamily};

/// A target platform: one OS family and one architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub os: OsFamily,
    pub arch: Arch,
}

impl Platform {
    /// The platform this crate was built for.
    pub const HOST: Platform = Platform {
        os: OsFamily::HOST,
        arch: Arch::HOST,
    };

    pub const fn new(os: OsFamily, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Name in `<os>-<arch>` form (e.g., "linux-x86_64").
    pub fn name(&self) -> String {
        format!("{}-{}", self.os.name(), self.arch.name())
    }

    pub const fn os_facts(&self) -> OsFacts {
        self.os.facts()
    }

    pub const fn arch_facts(&self) -> ArchFacts {
        self.arch.facts()
    }

    pub const fn is_windows(&self) -> bool {
        self.os.is_windows()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::HOST
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (os, arch) = s.split_once('-').ok_or_else(|| PlatformError::Malformed {
            input: s.to_string(),
        })?;
        Ok(Self {
            os: os.parse()?,
            arch: arch.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_platform_name() {
        let host = Platform::HOST;
        assert_eq!(
            host.name(),
            format!("{}-{}", crate::os_name(), crate::arch_name())
        );
        assert_eq!(host.to_string(), host.name());
        assert_eq!(Platform::default(), host);
    }

    #[test]
    fn parse_platform() {
        let p: Platform = "windows-x86_64".parse().unwrap();
        assert_eq!(p, Platform::new(OsFamily::Windows, Arch::X64));
        assert!(p.is_windows());

        let p: Platform = "linux-aarch64".parse().unwrap();
        assert_eq!(p.os, OsFamily::Linux);
        assert_eq!(p.arch, Arch::Arm64);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "linux".parse::<Platform>().unwrap_err(),
            PlatformError::Malformed {
                input: "linux".into()
            }
        );
        assert!(matches!(
            "beos-x86_64".parse::<Platform>(),
            Err(PlatformError::UnknownOs { .. })
        ));
        assert!(matches!(
            "linux-vax".parse::<Platform>(),
            Err(PlatformError::UnknownArch { .. })
        ));
    }

    #[test]
    fn serializes_as_names() {
        let p = Platform::new(OsFamily::MacOs, Arch::Arm64);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"os":"macos","arch":"aarch64"}"#);
    }
}
