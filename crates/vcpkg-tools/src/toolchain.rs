//! The operations a front end delegates to, and the requests they take.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::triplet::Triplet;
use crate::vcpkg::Vcpkg;

/// CMake build configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum BuildConfig {
    #[value(name = "Debug")]
    Debug,
    #[default]
    #[value(name = "Release")]
    Release,
}

impl BuildConfig {
    /// Name as CMake expects it (`CMAKE_BUILD_TYPE`, `--config`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }

    /// Lower-cased name used in build directory names.
    pub fn dir_suffix(self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for fetching and building third-party dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapRequest {
    /// vcpkg manifest root (holds `vcpkg.json`).
    pub ports_dir: PathBuf,
    pub triplet: Triplet,
    /// Short buildtrees location; vcpkg's default when `None`.
    pub build_root: Option<PathBuf>,
    pub install_root: String,
    pub overlay_ports: PathBuf,
    pub clean_after_build: bool,
    /// Enables the manifest's `ui` feature.
    pub ui_enabled: bool,
}

/// Parameters for compiling the host project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRequest {
    pub source_dir: PathBuf,
    pub triplet: Triplet,
    pub cmake_args: Vec<String>,
    pub install_root: String,
    /// Directory name under the build root; reused across runs.
    pub build_name: String,
    pub build_config: BuildConfig,
    pub run_tests_after_build: bool,
    /// Exported to every CMake child as `VCPKG_OVERLAY_PORTS`.
    pub overlay_ports: PathBuf,
}

/// The package-manager toolchain the front ends delegate to.
pub trait Toolchain {
    /// Ask the operator which triplet to use.
    fn prompt_for_triplet(&self) -> Result<Triplet>;

    fn bootstrap(&self, request: &BootstrapRequest) -> Result<()>;

    /// Remove previous dependency build output for `triplet`.
    fn clean(&self, triplet: &Triplet) -> Result<()>;

    /// Incremental development build.
    fn build_project(&self, request: &BuildRequest) -> Result<()>;

    /// Freshly configured build of `targets` (e.g. `package`).
    fn build_project_release(&self, request: &BuildRequest, targets: &[String]) -> Result<()>;
}

/// Which vcpkg checkout drives the run. Chosen once at startup.
///
/// Every toolchain call of the run goes to the selected checkout, the triplet
/// prompt included: with `--parent` it lists the parent checkout's triplets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolchainProvider {
    /// The checkout vendored under `deps/vcpkg`.
    Local,
    /// A parent project's checkout next to this one (`../vcpkg-ports`).
    ParentSibling,
}

impl ToolchainProvider {
    pub fn from_parent_flag(parent: bool) -> Self {
        if parent {
            Self::ParentSibling
        } else {
            Self::Local
        }
    }

    pub fn vcpkg_root(self, project_root: &Path) -> PathBuf {
        match self {
            Self::Local => project_root.join("deps").join("vcpkg"),
            Self::ParentSibling => project_root.join("..").join("vcpkg-ports"),
        }
    }

    pub fn open(self, project_root: &Path) -> Vcpkg {
        Vcpkg::new(self.vcpkg_root(project_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_names() {
        assert_eq!(BuildConfig::default(), BuildConfig::Release);
        assert_eq!(BuildConfig::Debug.as_str(), "Debug");
        assert_eq!(BuildConfig::Debug.dir_suffix(), "debug");
        assert_eq!(BuildConfig::Release.dir_suffix(), "release");
    }

    #[test]
    fn config_parses_case_insensitively() {
        assert_eq!(BuildConfig::from_str("debug", true).unwrap(), BuildConfig::Debug);
        assert_eq!(BuildConfig::from_str("Release", false).unwrap(), BuildConfig::Release);
        assert!(BuildConfig::from_str("RelWithDebInfo", true).is_err());
    }

    #[test]
    fn provider_roots() {
        let root = Path::new("/src/emap");
        assert_eq!(ToolchainProvider::from_parent_flag(false), ToolchainProvider::Local);
        assert_eq!(
            ToolchainProvider::Local.vcpkg_root(root),
            Path::new("/src/emap/deps/vcpkg")
        );
        assert_eq!(
            ToolchainProvider::from_parent_flag(true).vcpkg_root(root),
            Path::new("/src/emap/../vcpkg-ports")
        );
    }
}
