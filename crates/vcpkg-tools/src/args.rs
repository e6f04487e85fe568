//! Argument groups shared by the front-end binaries.
//!
//! Each binary flattens the group for its mode plus [`CommonArgs`] and adds
//! its own program-specific flags on top.

use clap::{ArgAction, Args};
use log::LevelFilter;
use std::path::PathBuf;

/// Flags every front end accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Override the detected host platform identifier (win-amd64, mingw, linux-x86_64, ...).
    #[arg(long, env = "EMAP_PLATFORM", hide = true)]
    pub platform: Option<String>,

    /// Print the resolved invocation as JSON instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// More output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Dependency bootstrap flags.
#[derive(Args, Debug, Clone, Default)]
pub struct BootstrapArgs {
    /// vcpkg triplet to install for (ignored on platforms with a fixed triplet).
    #[arg(long)]
    pub triplet: Option<String>,

    /// Remove previous dependency build output instead of bootstrapping.
    #[arg(long)]
    pub clean: bool,

    /// Let vcpkg drop buildtrees and packages after each port is built.
    #[arg(long)]
    pub clean_after_build: bool,

    /// Use the parent project's vcpkg checkout (../vcpkg-ports).
    #[arg(long)]
    pub parent: bool,
}

/// Project build flags.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// vcpkg triplet to build against (ignored on platforms with a fixed triplet).
    #[arg(long)]
    pub triplet: Option<String>,

    /// Project source directory.
    #[arg(long, default_value = ".")]
    pub source_dir: PathBuf,

    /// Build the distributable package instead of a development build.
    #[arg(long = "dist")]
    pub build_dist: bool,

    /// Run the test suite after building.
    #[arg(long)]
    pub run_tests: bool,

    /// Use the parent project's vcpkg checkout (../vcpkg-ports).
    #[arg(long)]
    pub parent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        bootstrap: BootstrapArgs,
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let quiet = CommonArgs { quiet: true, ..CommonArgs::default() };
        assert_eq!(quiet.log_level(), LevelFilter::Warn);
        assert_eq!(CommonArgs::default().log_level(), LevelFilter::Info);
        let loud = CommonArgs { verbose: 2, ..CommonArgs::default() };
        assert_eq!(loud.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn bootstrap_flags() {
        let h = Harness::try_parse_from([
            "bootstrap",
            "--triplet",
            "x64-linux",
            "--clean-after-build",
            "--parent",
            "-v",
        ])
        .unwrap();
        assert_eq!(h.bootstrap.triplet.as_deref(), Some("x64-linux"));
        assert!(h.bootstrap.clean_after_build);
        assert!(h.bootstrap.parent);
        assert!(!h.bootstrap.clean);
        assert_eq!(h.common.verbose, 1);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Harness::try_parse_from(["bootstrap", "-v", "-q"]).is_err());
    }
}
