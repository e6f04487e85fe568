use anyhow::{Context, Result};
use std::path;
use vcpkg_tools::args::BuildArgs;
use vcpkg_tools::{BuildConfig, BuildRequest, Toolchain};

use super::ResolveContext;
use crate::classify::classify_triplet;
use crate::invocation::{Invocation, Resolution};
use crate::paths;

/// Extra CMake arguments for every project build.
pub const CMAKE_ARGS: &[&str] = &["-DBUILD_TESTING=ON"];

/// Target built for distributable packages.
pub const DIST_TARGET: &str = "package";

/// Resolve a development or package build.
pub fn resolve(
    args: &BuildArgs,
    build_config: BuildConfig,
    ctx: &ResolveContext,
    toolchain: &dyn Toolchain,
) -> Result<Resolution> {
    let platform = ctx.platform();
    let choice = classify_triplet(platform, args.triplet.as_deref(), || {
        toolchain.prompt_for_triplet()
    })?;
    log::info!(
        "Triplet: {} ({:?}, platform {})",
        choice.triplet,
        choice.source,
        ctx.platform_id
    );

    let build_name = paths::build_dir_name(platform, build_config);
    let install_root = paths::install_root(&choice.triplet);
    let overlay_ports = paths::overlay_ports(&ctx.project_root)?;
    let source_dir = path::absolute(&args.source_dir)
        .with_context(|| format!("Resolving source dir {}", args.source_dir.display()))?;

    log::info!("Build dir: {build_name}, install root: {install_root}");

    let request = BuildRequest {
        source_dir,
        triplet: choice.triplet,
        cmake_args: CMAKE_ARGS.iter().map(ToString::to_string).collect(),
        install_root,
        build_name,
        build_config,
        run_tests_after_build: args.run_tests,
        overlay_ports,
    };

    let invocation = if args.build_dist {
        Invocation::BuildDist {
            request,
            targets: vec![DIST_TARGET.to_string()],
        }
    } else {
        Invocation::BuildDev(request)
    };

    Ok(Resolution {
        triplet_source: choice.source,
        invocation,
    })
}
