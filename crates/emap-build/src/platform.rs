//! Host platform identification.

use serde::Serialize;
use std::fmt;

/// 64-bit Windows with the MSVC toolchain.
pub const PRIMARY_DESKTOP_ID: &str = "win-amd64";
/// MinGW cross environment.
pub const MINIMAL_CROSS_ID: &str = "mingw";

/// The host's OS/architecture identifier, e.g. `win-amd64` or `linux-x86_64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlatformId(String);

impl PlatformId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier of the machine this binary was built for.
    pub fn host() -> Self {
        Self(host_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn platform(&self) -> Platform {
        Platform::classify(&self.0)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The platform classes the resolvers distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    PrimaryDesktop,
    MinimalCross,
    Other,
}

impl Platform {
    pub fn classify(id: &str) -> Self {
        match id {
            PRIMARY_DESKTOP_ID => Self::PrimaryDesktop,
            MINIMAL_CROSS_ID => Self::MinimalCross,
            _ => Self::Other,
        }
    }
}

fn host_id() -> String {
    use std::env::consts::{ARCH, OS};

    if cfg!(all(windows, target_env = "gnu")) {
        return MINIMAL_CROSS_ID.to_string();
    }
    match (OS, ARCH) {
        ("windows", "x86_64") => PRIMARY_DESKTOP_ID.to_string(),
        ("windows", "x86") => "win32".to_string(),
        ("windows", "aarch64") => "win-arm64".to_string(),
        ("macos", arch) => format!("macosx-{arch}"),
        (os, arch) => format!("{os}-{arch}"),
    }
}
