//! Operating system family.
//!
//! The host family is resolved with `cfg` at build time. [`OsFacts`] exposes
//! the family as a set of boolean flags plus the derived groups used by the
//! rest of the toolchain to pick OS-specific behavior.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// A supported operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    /// Linux excluding Android.
    Linux,
    MacOs,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Android,
    /// Emscripten, WASI, or bare `wasm*-unknown-unknown`.
    Wasm,
    Cygwin,
}

#[cfg(windows)]
const HOST_OS: OsFamily = OsFamily::Windows;
#[cfg(target_os = "linux")]
const HOST_OS: OsFamily = OsFamily::Linux;
#[cfg(target_os = "macos")]
const HOST_OS: OsFamily = OsFamily::MacOs;
#[cfg(target_os = "freebsd")]
const HOST_OS: OsFamily = OsFamily::FreeBsd;
#[cfg(target_os = "openbsd")]
const HOST_OS: OsFamily = OsFamily::OpenBsd;
#[cfg(target_os = "netbsd")]
const HOST_OS: OsFamily = OsFamily::NetBsd;
#[cfg(target_os = "android")]
const HOST_OS: OsFamily = OsFamily::Android;
#[cfg(any(
    target_os = "emscripten",
    target_os = "wasi",
    all(target_family = "wasm", target_os = "unknown")
))]
const HOST_OS: OsFamily = OsFamily::Wasm;
#[cfg(target_os = "cygwin")]
const HOST_OS: OsFamily = OsFamily::Cygwin;

#[cfg(not(any(
    windows,
    target_os = "linux",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "android",
    target_os = "emscripten",
    target_os = "wasi",
    all(target_family = "wasm", target_os = "unknown"),
    target_os = "cygwin"
)))]
compile_error!("zenc-platform: unsupported target operating system");

impl OsFamily {
    /// The family this crate was built for.
    pub const HOST: OsFamily = HOST_OS;

    /// Every family, in flag order.
    pub const ALL: [OsFamily; 9] = [
        OsFamily::Windows,
        OsFamily::Linux,
        OsFamily::MacOs,
        OsFamily::FreeBsd,
        OsFamily::OpenBsd,
        OsFamily::NetBsd,
        OsFamily::Android,
        OsFamily::Wasm,
        OsFamily::Cygwin,
    ];

    /// Canonical lowercase name (e.g., "linux", "macos").
    pub const fn name(self) -> &'static str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::MacOs => "macos",
            OsFamily::FreeBsd => "freebsd",
            OsFamily::OpenBsd => "openbsd",
            OsFamily::NetBsd => "netbsd",
            OsFamily::Android => "android",
            OsFamily::Wasm => "wasm",
            OsFamily::Cygwin => "cygwin",
        }
    }

    /// Flag view of this family.
    pub const fn facts(self) -> OsFacts {
        OsFacts::of(self)
    }

    pub const fn is_windows(self) -> bool {
        matches!(self, OsFamily::Windows)
    }

    pub const fn is_unix(self) -> bool {
        self.facts().unix()
    }

    pub const fn is_bsd(self) -> bool {
        self.facts().bsd()
    }

    pub const fn is_posix(self) -> bool {
        self.facts().posix()
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsFamily {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "darwin" {
            return Ok(OsFamily::MacOs);
        }
        OsFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| PlatformError::UnknownOs { name: s.to_string() })
    }
}

/// Boolean flags for one operating system family.
///
/// Exactly one family flag is set. The group accessors are pure functions of
/// the family flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OsFacts {
    pub windows: bool,
    pub linux: bool,
    pub macos: bool,
    pub freebsd: bool,
    pub openbsd: bool,
    pub netbsd: bool,
    pub android: bool,
    pub wasm: bool,
    pub cygwin: bool,
}

impl OsFacts {
    /// Facts for the build host.
    pub const HOST: OsFacts = OsFacts::of(OsFamily::HOST);

    /// Build the flag set for a family.
    pub const fn of(family: OsFamily) -> Self {
        Self {
            windows: matches!(family, OsFamily::Windows),
            linux: matches!(family, OsFamily::Linux),
            macos: matches!(family, OsFamily::MacOs),
            freebsd: matches!(family, OsFamily::FreeBsd),
            openbsd: matches!(family, OsFamily::OpenBsd),
            netbsd: matches!(family, OsFamily::NetBsd),
            android: matches!(family, OsFamily::Android),
            wasm: matches!(family, OsFamily::Wasm),
            cygwin: matches!(family, OsFamily::Cygwin),
        }
    }

    /// Linux, macOS, or one of the BSDs. Cygwin, Android and wasm are not unix here.
    pub const fn unix(&self) -> bool {
        self.linux || self.macos || self.freebsd || self.openbsd || self.netbsd
    }

    pub const fn bsd(&self) -> bool {
        self.freebsd || self.openbsd || self.netbsd
    }

    pub const fn posix(&self) -> bool {
        self.unix() || self.cygwin
    }

    /// The family flags in [`OsFamily::ALL`] order.
    pub const fn flags(&self) -> [bool; 9] {
        [
            self.windows,
            self.linux,
            self.macos,
            self.freebsd,
            self.openbsd,
            self.netbsd,
            self.android,
            self.wasm,
            self.cygwin,
        ]
    }
}

/// Canonical name of the host operating system.
pub const fn os_name() -> &'static str {
    OsFamily::HOST.name()
}

/// Whether `name` refers to the host operating system.
///
/// Only "linux", "windows", and "macos" (or "darwin") are recognized; any
/// other name is `false`.
pub fn matches_host_os(name: &str) -> bool {
    match name {
        "linux" => OsFamily::HOST == OsFamily::Linux,
        "windows" => OsFamily::HOST == OsFamily::Windows,
        "macos" | "darwin" => OsFamily::HOST == OsFamily::MacOs,
        _ => false,
    }
}

/// Coarse system name used for `comptime` OS checks: "windows", "macos", or
/// "linux" for everything else.
pub const fn system_name() -> &'static str {
    match OsFamily::HOST {
        OsFamily::Windows => "windows",
        OsFamily::MacOs => "macos",
        _ => "linux",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_family_flag() {
        for family in OsFamily::ALL {
            let set = family.facts().flags().iter().filter(|f| **f).count();
            assert_eq!(set, 1, "{family} sets {set} flags");
        }
        assert_eq!(OsFacts::HOST.flags().iter().filter(|f| **f).count(), 1);
    }

    #[test]
    fn flag_order_matches_all() {
        for (index, family) in OsFamily::ALL.into_iter().enumerate() {
            assert!(family.facts().flags()[index], "{family} flag at {index}");
        }
    }

    #[test]
    fn groups_are_unions() {
        for family in OsFamily::ALL {
            let f = family.facts();
            assert_eq!(
                f.unix(),
                f.linux || f.macos || f.freebsd || f.openbsd || f.netbsd
            );
            assert_eq!(f.bsd(), f.freebsd || f.openbsd || f.netbsd);
            assert_eq!(f.posix(), f.unix() || f.cygwin);
        }
    }

    #[test]
    fn cygwin_is_posix_not_unix() {
        let f = OsFamily::Cygwin.facts();
        assert!(!f.unix());
        assert!(f.posix());
        assert!(!OsFamily::Android.is_unix());
        assert!(!OsFamily::Windows.is_posix());
    }

    #[test]
    fn names_parse_back() {
        for family in OsFamily::ALL {
            assert_eq!(family.name().parse::<OsFamily>().unwrap(), family);
        }
        assert_eq!("darwin".parse::<OsFamily>().unwrap(), OsFamily::MacOs);
        assert!("plan9".parse::<OsFamily>().is_err());
    }

    #[test]
    fn host_name_is_canonical() {
        assert_eq!(os_name(), OsFamily::HOST.name());
        #[cfg(target_os = "linux")]
        assert_eq!(os_name(), "linux");
        #[cfg(windows)]
        assert_eq!(os_name(), "windows");
    }

    #[test]
    fn host_matching() {
        assert!(!matches_host_os("plan9"));
        assert!(!matches_host_os(""));
        #[cfg(target_os = "linux")]
        {
            assert!(matches_host_os("linux"));
            assert!(!matches_host_os("windows"));
            assert!(!matches_host_os("darwin"));
            assert_eq!(system_name(), "linux");
        }
        #[cfg(target_os = "macos")]
        {
            assert!(matches_host_os("darwin"));
            assert_eq!(system_name(), "macos");
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&OsFamily::FreeBsd).unwrap();
        assert_eq!(json, "\"freebsd\"");
        let back: OsFamily = serde_json::from_str("\"macos\"").unwrap();
        assert_eq!(back, OsFamily::MacOs);
    }
}
