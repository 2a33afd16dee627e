//! Platform detection and the kind binary lookup table.
//!
//! Pure functions only. [`PlatformKey::current`] reads compile-time constants
//! from `std::env::consts`; everything else takes its inputs explicitly so
//! tests can resolve any platform.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::domain::error::DispatchError;

/// Directory, next to the running program, that holds the bundled binaries.
pub const BINARY_DIR: &str = "kind";

static CURRENT: LazyLock<PlatformKey> = LazyLock::new(|| {
    PlatformKey::new(
        std::env::consts::OS,
        std::env::consts::ARCH,
        default_runtime_id(std::env::consts::OS, std::env::consts::ARCH),
    )
});

// ── Platform facts ───────────────────────────────────────────────────────────

/// Operating system families with a bundled binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Linux,
    Windows,
}

impl OsFamily {
    /// Parse an OS name as reported by Rust (`std::env::consts::OS`) or by
    /// common runtime identifiers.
    #[must_use]
    pub fn parse(os: &str) -> Option<Self> {
        match os {
            "macos" | "osx" | "darwin" => Some(Self::MacOs),
            "linux" => Some(Self::Linux),
            "windows" | "win" => Some(Self::Windows),
            _ => None,
        }
    }
}

/// CPU architectures with a bundled binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    #[must_use]
    pub fn parse(arch: &str) -> Option<Self> {
        match arch {
            "x86_64" | "x64" | "amd64" => Some(Self::X64),
            "aarch64" | "arm64" => Some(Self::Arm64),
            _ => None,
        }
    }
}

/// The facts a binary is selected by.
///
/// Fields keep the raw strings so an unsupported platform can be reported
/// exactly as it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformKey {
    pub os: String,
    pub arch: String,
    pub runtime_id: String,
}

impl PlatformKey {
    pub fn new(
        os: impl Into<String>,
        arch: impl Into<String>,
        runtime_id: impl Into<String>,
    ) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
            runtime_id: runtime_id.into(),
        }
    }

    /// Platform of the running process, computed once.
    #[must_use]
    pub fn current() -> &'static PlatformKey {
        &CURRENT
    }

    /// Same OS and architecture with a different runtime identifier.
    #[must_use]
    pub fn with_runtime_id(&self, runtime_id: impl Into<String>) -> Self {
        Self {
            runtime_id: runtime_id.into(),
            ..self.clone()
        }
    }

    /// First `-`-separated segment of the runtime identifier.
    #[must_use]
    pub fn runtime_family(&self) -> &str {
        self.runtime_id
            .split('-')
            .next()
            .unwrap_or(self.runtime_id.as_str())
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.os, self.arch, self.runtime_id)
    }
}

/// Runtime identifier for a Rust OS/arch pair, e.g. `linux-x64`.
///
/// Linux builds against musl report `linux-musl-<arch>`.
#[must_use]
pub fn default_runtime_id(os: &str, arch: &str) -> String {
    let os_part = match OsFamily::parse(os) {
        Some(OsFamily::MacOs) => "osx",
        Some(OsFamily::Windows) => "win",
        Some(OsFamily::Linux) if cfg!(target_env = "musl") => "linux-musl",
        Some(OsFamily::Linux) => "linux",
        None => os,
    };
    let arch_part = match Arch::parse(arch) {
        Some(Arch::X64) => "x64",
        Some(Arch::Arm64) => "arm64",
        None => arch,
    };
    format!("{os_part}-{arch_part}")
}

// ── Lookup table ─────────────────────────────────────────────────────────────

/// The bundled kind executables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryName {
    OsxX64,
    OsxArm64,
    LinuxX64,
    LinuxArm64,
    WinX64,
}

impl BinaryName {
    /// File name inside [`BINARY_DIR`].
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::OsxX64 => "kind-osx-x64",
            Self::OsxArm64 => "kind-osx-arm64",
            Self::LinuxX64 => "kind-linux-x64",
            Self::LinuxArm64 => "kind-linux-arm64",
            Self::WinX64 => "kind-win-x64.exe",
        }
    }
}

impl fmt::Display for BinaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

struct PlatformEntry {
    os: OsFamily,
    arch: Arch,
    runtime_family: &'static str,
    binary: BinaryName,
}

const PLATFORM_TABLE: &[PlatformEntry] = &[
    PlatformEntry {
        os: OsFamily::MacOs,
        arch: Arch::X64,
        runtime_family: "osx",
        binary: BinaryName::OsxX64,
    },
    PlatformEntry {
        os: OsFamily::MacOs,
        arch: Arch::Arm64,
        runtime_family: "osx",
        binary: BinaryName::OsxArm64,
    },
    PlatformEntry {
        os: OsFamily::Linux,
        arch: Arch::X64,
        runtime_family: "linux",
        binary: BinaryName::LinuxX64,
    },
    PlatformEntry {
        os: OsFamily::Linux,
        arch: Arch::Arm64,
        runtime_family: "linux",
        binary: BinaryName::LinuxArm64,
    },
    PlatformEntry {
        os: OsFamily::Windows,
        arch: Arch::X64,
        runtime_family: "win",
        binary: BinaryName::WinX64,
    },
];

/// Select the bundled binary for a platform.
///
/// # Errors
///
/// Returns [`DispatchError::UnsupportedPlatform`] if no table row matches the
/// OS, architecture, and runtime identifier family.
pub fn resolve(key: &PlatformKey) -> Result<BinaryName, DispatchError> {
    let os = OsFamily::parse(&key.os);
    let arch = Arch::parse(&key.arch);
    let family = key.runtime_family();

    PLATFORM_TABLE
        .iter()
        .find(|e| Some(e.os) == os && Some(e.arch) == arch && e.runtime_family == family)
        .map(|e| e.binary)
        .ok_or_else(|| DispatchError::UnsupportedPlatform {
            os: key.os.clone(),
            arch: key.arch.clone(),
        })
}
