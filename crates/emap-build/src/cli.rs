use clap::Parser;
use vcpkg_tools::args::{BootstrapArgs, BuildArgs, CommonArgs};
use vcpkg_tools::BuildConfig;

#[derive(Parser, Debug)]
#[command(name = "bootstrap")]
#[command(about = "Bootstrap E-MAP: fetch and build third-party dependencies with vcpkg")]
pub struct BootstrapCli {
    #[command(flatten)]
    pub args: BootstrapArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "build-emap")]
#[command(about = "Build E-MAP against its vcpkg dependencies")]
pub struct BuildCli {
    #[command(flatten)]
    pub args: BuildArgs,

    /// Build configuration.
    #[arg(long, value_enum, ignore_case = true, default_value_t = BuildConfig::Release)]
    pub build_config: BuildConfig,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn build_defaults() {
        let cli = BuildCli::try_parse_from(["build-emap"]).unwrap();
        assert_eq!(cli.build_config, BuildConfig::Release);
        assert_eq!(cli.args.source_dir, Path::new("."));
        assert!(!cli.args.build_dist);
        assert!(!cli.args.run_tests);
        assert!(cli.args.triplet.is_none());
    }

    #[test]
    fn build_config_is_case_insensitive() {
        for value in ["Debug", "debug", "DEBUG"] {
            let cli = BuildCli::try_parse_from(["build-emap", "--build-config", value]).unwrap();
            assert_eq!(cli.build_config, BuildConfig::Debug);
        }
        assert!(BuildCli::try_parse_from(["build-emap", "--build-config", "MinSizeRel"]).is_err());
    }

    #[test]
    fn build_dist_flags() {
        let cli = BuildCli::try_parse_from([
            "build-emap",
            "--dist",
            "--run-tests",
            "--source-dir",
            "../emap",
            "--triplet",
            "x64-linux",
        ])
        .unwrap();
        assert!(cli.args.build_dist);
        assert!(cli.args.run_tests);
        assert_eq!(cli.args.source_dir, Path::new("../emap"));
        assert_eq!(cli.args.triplet.as_deref(), Some("x64-linux"));
    }

    #[test]
    fn bootstrap_flags() {
        let cli = BootstrapCli::try_parse_from(["bootstrap", "--clean", "--dry-run"]).unwrap();
        assert!(cli.args.clean);
        assert!(cli.common.dry_run);
        assert!(BootstrapCli::try_parse_from(["bootstrap", "--build-config", "Debug"]).is_err());
    }

    #[test]
    fn clap_definitions_are_consistent() {
        use clap::CommandFactory;
        BootstrapCli::command().debug_assert();
        BuildCli::command().debug_assert();
    }
}
