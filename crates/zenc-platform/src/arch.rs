//! CPU architecture.
//!
//! Resolved with `cfg(target_arch)` at build time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// A supported CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    #[serde(rename = "x86_64")]
    X64,
    #[serde(rename = "x86")]
    X86,
    #[serde(rename = "aarch64")]
    Arm64,
    #[serde(rename = "arm")]
    Arm32,
    #[serde(rename = "riscv32")]
    Riscv32,
    #[serde(rename = "riscv64")]
    Riscv64,
    /// 32- and 64-bit MIPS.
    #[serde(rename = "mips")]
    Mips,
    /// 32- and 64-bit PowerPC.
    #[serde(rename = "powerpc")]
    Ppc,
    #[serde(rename = "s390x")]
    S390x,
    #[serde(rename = "wasm")]
    Wasm,
}

#[cfg(target_arch = "x86_64")]
const HOST_ARCH: Arch = Arch::X64;
#[cfg(target_arch = "x86")]
const HOST_ARCH: Arch = Arch::X86;
#[cfg(target_arch = "aarch64")]
const HOST_ARCH: Arch = Arch::Arm64;
#[cfg(target_arch = "arm")]
const HOST_ARCH: Arch = Arch::Arm32;
#[cfg(target_arch = "riscv32")]
const HOST_ARCH: Arch = Arch::Riscv32;
#[cfg(target_arch = "riscv64")]
const HOST_ARCH: Arch = Arch::Riscv64;
#[cfg(any(
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "mips32r6",
    target_arch = "mips64r6"
))]
const HOST_ARCH: Arch = Arch::Mips;
#[cfg(any(target_arch = "powerpc", target_arch = "powerpc64"))]
const HOST_ARCH: Arch = Arch::Ppc;
#[cfg(target_arch = "s390x")]
const HOST_ARCH: Arch = Arch::S390x;
#[cfg(any(target_arch = "wasm32", target_arch = "wasm64"))]
const HOST_ARCH: Arch = Arch::Wasm;

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "x86",
    target_arch = "aarch64",
    target_arch = "arm",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "mips32r6",
    target_arch = "mips64r6",
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "s390x",
    target_arch = "wasm32",
    target_arch = "wasm64"
)))]
compile_error!("zenc-platform: unsupported target architecture");

/// Pointer size of the build target, in bytes.
pub const POINTER_WIDTH: usize = std::mem::size_of::<*const ()>();

impl Arch {
    /// The architecture this crate was built for.
    pub const HOST: Arch = HOST_ARCH;

    /// Every architecture, in flag order.
    pub const ALL: [Arch; 10] = [
        Arch::X64,
        Arch::X86,
        Arch::Arm64,
        Arch::Arm32,
        Arch::Riscv32,
        Arch::Riscv64,
        Arch::Mips,
        Arch::Ppc,
        Arch::S390x,
        Arch::Wasm,
    ];

    /// Canonical name (e.g., "x86_64", "aarch64").
    pub const fn name(self) -> &'static str {
        match self {
            Arch::X64 => "x86_64",
            Arch::X86 => "x86",
            Arch::Arm64 => "aarch64",
            Arch::Arm32 => "arm",
            Arch::Riscv32 => "riscv32",
            Arch::Riscv64 => "riscv64",
            Arch::Mips => "mips",
            Arch::Ppc => "powerpc",
            Arch::S390x => "s390x",
            Arch::Wasm => "wasm",
        }
    }

    pub const fn facts(self) -> ArchFacts {
        ArchFacts::of(self)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arch::ALL
            .into_iter()
            .find(|arch| arch.name() == s)
            .ok_or_else(|| PlatformError::UnknownArch { name: s.to_string() })
    }
}

/// Boolean flags for one architecture.
///
/// Exactly one architecture flag is set. MIPS, PowerPC and wasm belong to
/// neither width group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ArchFacts {
    pub x64: bool,
    pub x86: bool,
    pub arm64: bool,
    pub arm32: bool,
    pub riscv32: bool,
    pub riscv64: bool,
    pub mips: bool,
    pub ppc: bool,
    pub s390x: bool,
    pub wasm: bool,
}

impl ArchFacts {
    /// Facts for the build host.
    pub const HOST: ArchFacts = ArchFacts::of(Arch::HOST);

    pub const fn of(arch: Arch) -> Self {
        Self {
            x64: matches!(arch, Arch::X64),
            x86: matches!(arch, Arch::X86),
            arm64: matches!(arch, Arch::Arm64),
            arm32: matches!(arch, Arch::Arm32),
            riscv32: matches!(arch, Arch::Riscv32),
            riscv64: matches!(arch, Arch::Riscv64),
            mips: matches!(arch, Arch::Mips),
            ppc: matches!(arch, Arch::Ppc),
            s390x: matches!(arch, Arch::S390x),
            wasm: matches!(arch, Arch::Wasm),
        }
    }

    pub const fn riscv(&self) -> bool {
        self.riscv32 || self.riscv64
    }

    pub const fn x86_any(&self) -> bool {
        self.x64 || self.x86
    }

    pub const fn arm_any(&self) -> bool {
        self.arm64 || self.arm32
    }

    pub const fn bits64(&self) -> bool {
        self.x64 || self.arm64 || self.riscv64 || self.s390x
    }

    pub const fn bits32(&self) -> bool {
        self.x86 || self.arm32 || self.riscv32
    }

    /// The architecture flags in [`Arch::ALL`] order.
    pub const fn flags(&self) -> [bool; 10] {
        [
            self.x64,
            self.x86,
            self.arm64,
            self.arm32,
            self.riscv32,
            self.riscv64,
            self.mips,
            self.ppc,
            self.s390x,
            self.wasm,
        ]
    }
}

/// Canonical name of the host architecture.
pub const fn arch_name() -> &'static str {
    Arch::HOST.name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_arch_flag() {
        for arch in Arch::ALL {
            let set = arch.facts().flags().iter().filter(|f| **f).count();
            assert_eq!(set, 1, "{arch} sets {set} flags");
        }
        assert_eq!(ArchFacts::HOST.flags().iter().filter(|f| **f).count(), 1);
    }

    #[test]
    fn width_groups_are_unions() {
        for arch in Arch::ALL {
            let f = arch.facts();
            assert_eq!(f.bits64(), f.x64 || f.arm64 || f.riscv64 || f.s390x);
            assert_eq!(f.bits32(), f.x86 || f.arm32 || f.riscv32);
            assert_eq!(f.x86_any(), f.x64 || f.x86);
            assert_eq!(f.arm_any(), f.arm64 || f.arm32);
            assert!(!(f.bits64() && f.bits32()), "{arch} in both width groups");
        }
    }

    #[test]
    fn pointer_width_agrees_with_group() {
        let host = ArchFacts::HOST;
        if host.bits64() {
            assert_eq!(POINTER_WIDTH, 8);
        }
        if host.bits32() {
            assert_eq!(POINTER_WIDTH, 4);
        }
    }

    #[test]
    fn host_name() {
        assert_eq!(arch_name(), Arch::HOST.name());
        #[cfg(target_arch = "x86_64")]
        assert_eq!(arch_name(), "x86_64");
        #[cfg(target_arch = "aarch64")]
        assert_eq!(arch_name(), "aarch64");
    }

    #[test]
    fn names_parse_back() {
        for arch in Arch::ALL {
            assert_eq!(arch.name().parse::<Arch>().unwrap(), arch);
        }
        assert!("sparc".parse::<Arch>().is_err());
    }
}
