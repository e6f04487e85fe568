//! CMake command lines for configuring, building and testing the host project
//! against a vcpkg install root.

use anyhow::{Context, Result};
use std::path::{self, Path};
use std::process::Command;

use crate::toolchain::BuildRequest;

/// Environment variable the vcpkg CMake toolchain reads overlay ports from.
pub const OVERLAY_PORTS_ENV: &str = "VCPKG_OVERLAY_PORTS";

pub(crate) const NINJA: &str = "Ninja";

pub(crate) fn configure_command(
    vcpkg_root: &Path,
    build_dir: &Path,
    request: &BuildRequest,
    generator: Option<&str>,
) -> Result<Command> {
    let toolchain_file = path::absolute(
        vcpkg_root
            .join("scripts")
            .join("buildsystems")
            .join("vcpkg.cmake"),
    )
    .context("Resolving vcpkg toolchain file")?;
    let installed_dir = path::absolute(&request.install_root)
        .with_context(|| format!("Resolving install root {}", request.install_root))?;

    let mut cmd = Command::new("cmake");
    cmd.arg("-S").arg(&request.source_dir);
    cmd.arg("-B").arg(build_dir);
    if let Some(generator) = generator {
        cmd.args(["-G", generator]);
    }
    cmd.arg(format!("-DCMAKE_BUILD_TYPE={}", request.build_config))
        .arg(format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain_file.display()))
        .arg(format!("-DVCPKG_TARGET_TRIPLET={}", request.triplet))
        .arg(format!("-DVCPKG_INSTALLED_DIR={}", installed_dir.display()))
        .arg("-DVCPKG_MANIFEST_MODE=OFF")
        .args(&request.cmake_args);
    apply_env(&mut cmd, request);
    Ok(cmd)
}

pub(crate) fn build_command(
    build_dir: &Path,
    request: &BuildRequest,
    targets: &[String],
) -> Command {
    let mut cmd = Command::new("cmake");
    cmd.arg("--build")
        .arg(build_dir)
        .args(["--config", request.build_config.as_str()]);
    if !targets.is_empty() {
        cmd.arg("--target").args(targets);
    }
    apply_env(&mut cmd, request);
    cmd
}

pub(crate) fn test_command(build_dir: &Path, request: &BuildRequest) -> Command {
    let mut cmd = Command::new("ctest");
    cmd.arg("--test-dir")
        .arg(build_dir)
        .args(["-C", request.build_config.as_str()])
        .arg("--output-on-failure");
    apply_env(&mut cmd, request);
    cmd
}

fn apply_env(cmd: &mut Command, request: &BuildRequest) {
    cmd.env(OVERLAY_PORTS_ENV, &request.overlay_ports);
}

pub(crate) fn is_configured(build_dir: &Path) -> bool {
    build_dir.join("CMakeCache.txt").is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::BuildConfig;
    use crate::Triplet;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn request() -> BuildRequest {
        BuildRequest {
            source_dir: PathBuf::from("/src/emap"),
            triplet: Triplet::new("x64-linux").unwrap(),
            cmake_args: vec!["-DBUILD_TESTING=ON".to_string()],
            install_root: "vcpkgs-x64-linux".to_string(),
            build_name: "emap-release".to_string(),
            build_config: BuildConfig::Release,
            run_tests_after_build: false,
            overlay_ports: PathBuf::from("/src/emap/deps/overlay-ports"),
        }
    }

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn overlay_env(cmd: &Command) -> Option<&OsStr> {
        cmd.get_envs()
            .find(|(key, _)| *key == OVERLAY_PORTS_ENV)
            .and_then(|(_, value)| value)
    }

    #[test]
    fn configure_points_cmake_at_vcpkg() {
        let cmd = configure_command(
            Path::new("/src/emap/deps/vcpkg"),
            Path::new("build/emap-release"),
            &request(),
            Some(NINJA),
        )
        .unwrap();
        let args = args(&cmd);

        assert_eq!(cmd.get_program(), "cmake");
        assert_eq!(&args[..6], ["-S", "/src/emap", "-B", "build/emap-release", "-G", "Ninja"]);
        assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
        assert!(args.contains(&"-DVCPKG_TARGET_TRIPLET=x64-linux".to_string()));
        assert!(args.iter().any(|a| a.starts_with("-DCMAKE_TOOLCHAIN_FILE=")
            && a.ends_with("vcpkg.cmake")));
        assert!(args.iter().any(|a| a.starts_with("-DVCPKG_INSTALLED_DIR=")
            && a.ends_with("vcpkgs-x64-linux")));
        assert_eq!(args.last().map(String::as_str), Some("-DBUILD_TESTING=ON"));
        assert_eq!(
            overlay_env(&cmd),
            Some(OsStr::new("/src/emap/deps/overlay-ports"))
        );
    }

    #[test]
    fn configure_without_generator() {
        let cmd = configure_command(
            Path::new("deps/vcpkg"),
            Path::new("build/emap"),
            &request(),
            None,
        )
        .unwrap();
        assert!(!args(&cmd).contains(&"-G".to_string()));
    }

    #[test]
    fn build_lists_targets_only_when_given() {
        let dir = Path::new("build/emap-release");
        let plain = build_command(dir, &request(), &[]);
        assert_eq!(args(&plain), ["--build", "build/emap-release", "--config", "Release"]);

        let package = build_command(dir, &request(), &["package".to_string()]);
        assert_eq!(
            args(&package),
            ["--build", "build/emap-release", "--config", "Release", "--target", "package"]
        );
        assert!(overlay_env(&package).is_some());
    }

    #[test]
    fn tests_run_through_ctest() {
        let mut req = request();
        req.build_config = BuildConfig::Debug;
        let cmd = test_command(Path::new("build/emap-debug"), &req);
        assert_eq!(cmd.get_program(), "ctest");
        assert_eq!(
            args(&cmd),
            ["--test-dir", "build/emap-debug", "-C", "Debug", "--output-on-failure"]
        );
    }

    #[test]
    fn configured_means_cache_present() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(!is_configured(tmp.path()));
        std::fs::write(tmp.path().join("CMakeCache.txt"), "").unwrap();
        assert!(is_configured(tmp.path()));
    }
}
