//! vcpkg checkout driver: dependency bootstrap, cleanup, triplet prompt and
//! CMake builds against the resulting install root.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::cmake;
use crate::process::run_cmd;
use crate::toolchain::{BootstrapRequest, BuildRequest, Toolchain};
use crate::triplet::{self, Triplet};

/// Parent directory of per-configuration build directories.
pub const BUILD_DIR: &str = "build";

const EXE_NAME: &str = if cfg!(windows) { "vcpkg.exe" } else { "vcpkg" };
const BOOTSTRAP_SCRIPT: &str = if cfg!(windows) {
    "bootstrap-vcpkg.bat"
} else {
    "bootstrap-vcpkg.sh"
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reconfigure {
    IfMissing,
    Always,
}

/// A vcpkg checkout plus the buildtrees location bootstrap runs use.
#[derive(Debug, Clone)]
pub struct Vcpkg {
    root: PathBuf,
    buildtrees_root: Option<PathBuf>,
}

impl Vcpkg {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            buildtrees_root: None,
        }
    }

    /// Buildtrees live under `buildtrees_root` instead of the checkout.
    /// [`Toolchain::clean`] empties it but keeps the directory.
    #[must_use]
    pub fn with_buildtrees_root(mut self, buildtrees_root: Option<PathBuf>) -> Self {
        self.buildtrees_root = buildtrees_root;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn executable(&self) -> PathBuf {
        self.root.join(EXE_NAME)
    }

    /// Directory a build named `build_name` lives in.
    pub fn build_path(build_name: &str) -> PathBuf {
        Path::new(BUILD_DIR).join(build_name)
    }

    /// Directories [`Toolchain::clean`] removes for `triplet`, including the
    /// `vcpkgs-<triplet>` install root bootstrap writes to.
    pub fn clean_targets(&self, triplet: &Triplet) -> Vec<PathBuf> {
        vec![
            self.root.join("buildtrees"),
            self.root.join("packages"),
            self.root.join("installed").join(triplet.as_str()),
            PathBuf::from(triplet.install_root()),
        ]
    }

    /// The `vcpkg install` invocation for `request`.
    pub fn install_command(&self, exe: &Path, request: &BootstrapRequest) -> Command {
        let mut cmd = Command::new(exe);
        cmd.arg("install")
            .arg(format!("--triplet={}", request.triplet))
            .arg(format!("--x-manifest-root={}", request.ports_dir.display()))
            .arg(format!("--x-install-root={}", request.install_root))
            .arg(format!("--overlay-ports={}", request.overlay_ports.display()));
        if let Some(build_root) = &request.build_root {
            cmd.arg(format!("--x-buildtrees-root={}", build_root.display()));
        }
        if request.clean_after_build {
            cmd.arg("--clean-after-build");
        }
        if request.ui_enabled {
            cmd.arg("--x-feature=ui");
        }
        cmd
    }

    /// Build the vcpkg executable from its checkout if it is not there yet.
    fn ensure_bootstrapped(&self) -> Result<PathBuf> {
        let exe = self.executable();
        if exe.is_file() {
            return Ok(exe);
        }

        let script = self.root.join(BOOTSTRAP_SCRIPT);
        if !script.is_file() {
            bail!(
                "No vcpkg checkout at {} (missing {})",
                self.root.display(),
                BOOTSTRAP_SCRIPT
            );
        }

        log::info!("Bootstrapping vcpkg in {}", self.root.display());
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&script);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg(&script);
            cmd
        };
        cmd.arg("-disableMetrics").current_dir(&self.root);
        run_cmd(&mut cmd).context("Bootstrapping vcpkg")?;

        if !exe.is_file() {
            bail!("vcpkg bootstrap finished but {} is missing", exe.display());
        }
        Ok(exe)
    }

    fn preferred_generator() -> Option<&'static str> {
        which::which("ninja").ok().map(|_| cmake::NINJA)
    }

    fn build(
        &self,
        request: &BuildRequest,
        targets: &[String],
        reconfigure: Reconfigure,
    ) -> Result<()> {
        let build_dir = Self::build_path(&request.build_name);
        let configured = cmake::is_configured(&build_dir);

        if reconfigure == Reconfigure::Always || !configured {
            // An existing cache pins its generator; only pick one for fresh trees.
            let generator = if configured {
                None
            } else {
                Self::preferred_generator()
            };
            log::info!("Configuring {}", build_dir.display());
            let mut cmd =
                cmake::configure_command(&self.root, &build_dir, request, generator)?;
            run_cmd(&mut cmd).context("Configuring project")?;
        } else {
            log::debug!("Reusing configured tree {}", build_dir.display());
        }

        log::info!("Building {} ({})", request.build_name, request.build_config);
        run_cmd(&mut cmake::build_command(&build_dir, request, targets))
            .with_context(|| format!("Building {}", request.build_name))?;

        if request.run_tests_after_build {
            log::info!("Running tests");
            run_cmd(&mut cmake::test_command(&build_dir, request)).context("Running tests")?;
        }
        Ok(())
    }
}

impl Toolchain for Vcpkg {
    fn prompt_for_triplet(&self) -> Result<Triplet> {
        let options = triplet::available_triplets(&self.root)?;
        // stdout is reserved for the report and the `--dry-run` plan.
        triplet::prompt(&options, &mut io::stdin().lock(), &mut io::stderr())
    }

    fn bootstrap(&self, request: &BootstrapRequest) -> Result<()> {
        let exe = self.ensure_bootstrapped()?;
        log::info!("Installing dependencies for {}", request.triplet);
        run_cmd(&mut self.install_command(&exe, request))
            .with_context(|| format!("Installing dependencies for {}", request.triplet))
    }

    fn clean(&self, triplet: &Triplet) -> Result<()> {
        for dir in self.clean_targets(triplet) {
            if dir.exists() {
                fs::remove_dir_all(&dir).with_context(|| format!("Removing {}", dir.display()))?;
                log::info!("Removed {}", dir.display());
            } else {
                log::debug!("{} not present", dir.display());
            }
        }
        if let Some(buildtrees_root) = &self.buildtrees_root {
            clear_dir(buildtrees_root)?;
        }
        Ok(())
    }

    fn build_project(&self, request: &BuildRequest) -> Result<()> {
        self.build(request, &[], Reconfigure::IfMissing)
    }

    fn build_project_release(&self, request: &BuildRequest, targets: &[String]) -> Result<()> {
        self.build(request, targets, Reconfigure::Always)
    }
}

/// Remove everything inside `dir`, leaving `dir` itself in place.
fn clear_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    let entries = fs::read_dir(dir).with_context(|| format!("Reading {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Reading {}", dir.display()))?
            .path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.with_context(|| format!("Removing {}", path.display()))?;
    }
    log::info!("Emptied {}", dir.display());
    Ok(())
}
