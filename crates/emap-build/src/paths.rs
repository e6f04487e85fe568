//! Path and name derivation shared by both front ends.

use anyhow::{Context, Result};
use std::env;
use std::path::{self, Path, PathBuf};
use vcpkg_tools::{BuildConfig, Triplet};

use crate::platform::Platform;

/// Fixed build directory tag.
pub const PROJECT_TAG: &str = "emap";

/// Dependencies directory, relative to the working directory.
pub const PORTS_DIR: &str = "deps";

/// Overrides the compiled-in project root.
pub const PROJECT_ROOT_ENV: &str = "EMAP_PROJECT_ROOT";

/// Conventional short build path on Windows. Used only if it already exists.
pub const SHORT_BUILD_ROOT: &str = r"C:\DEV\bld";

/// Root of the checkout these binaries belong to.
pub fn project_root() -> Result<PathBuf> {
    if let Some(root) = env::var_os(PROJECT_ROOT_ENV) {
        return Ok(PathBuf::from(root));
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .context("emap-build is expected at <repo>/crates/emap-build")
}

/// `./deps`, handed to vcpkg as the manifest root.
pub fn ports_dir() -> PathBuf {
    Path::new(".").join(PORTS_DIR)
}

/// Absolute overlay-ports directory under `project_root`.
pub fn overlay_ports(project_root: &Path) -> Result<PathBuf> {
    let dir = project_root.join(PORTS_DIR).join("overlay-ports");
    path::absolute(&dir).with_context(|| format!("Resolving {}", dir.display()))
}

/// `vcpkgs-<triplet>`.
pub fn install_root(triplet: &Triplet) -> String {
    triplet.install_root()
}

/// Build directory name. Windows keeps one directory for every configuration.
pub fn build_dir_name(platform: Platform, config: BuildConfig) -> String {
    match platform {
        Platform::PrimaryDesktop => PROJECT_TAG.to_string(),
        Platform::MinimalCross | Platform::Other => {
            format!("{PROJECT_TAG}-{}", config.dir_suffix())
        }
    }
}

/// `candidate` if we are on Windows and it exists.
pub fn short_build_root(platform: Platform, candidate: &Path) -> Option<PathBuf> {
    match platform {
        Platform::PrimaryDesktop if candidate.is_dir() => Some(candidate.to_path_buf()),
        Platform::PrimaryDesktop | Platform::MinimalCross | Platform::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn install_root_is_plain_concatenation() {
        for name in ["x64-windows-static-vs2022", "x64-mingw", "X64-Linux ", "a"] {
            let triplet = Triplet::new(name).unwrap();
            assert_eq!(install_root(&triplet), format!("vcpkgs-{name}"));
        }
    }

    #[test]
    fn build_dir_names() {
        assert_eq!(build_dir_name(Platform::PrimaryDesktop, BuildConfig::Debug), "emap");
        assert_eq!(build_dir_name(Platform::PrimaryDesktop, BuildConfig::Release), "emap");
        assert_eq!(build_dir_name(Platform::MinimalCross, BuildConfig::Debug), "emap-debug");
        assert_eq!(build_dir_name(Platform::Other, BuildConfig::Release), "emap-release");
    }

    #[test]
    fn short_build_root_requires_windows_and_an_existing_dir() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            short_build_root(Platform::PrimaryDesktop, tmp.path()),
            Some(tmp.path().to_path_buf())
        );
        assert_eq!(short_build_root(Platform::Other, tmp.path()), None);
        assert_eq!(short_build_root(Platform::MinimalCross, tmp.path()), None);
        assert_eq!(
            short_build_root(Platform::PrimaryDesktop, &tmp.path().join("missing")),
            None
        );
    }

    #[test]
    fn overlay_ports_is_absolute() {
        let dir = overlay_ports(Path::new("relative/root")).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("relative/root/deps/overlay-ports"));
    }

    #[test]
    fn compiled_in_root_holds_the_workspace() {
        if env::var_os(PROJECT_ROOT_ENV).is_some() {
            return;
        }
        let root = project_root().unwrap();
        assert!(root.join("crates").join("emap-build").is_dir());
    }
}
