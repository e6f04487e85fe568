use anyhow::Result;
use vcpkg_tools::args::BootstrapArgs;
use vcpkg_tools::{BootstrapRequest, Toolchain};

use super::ResolveContext;
use crate::classify::classify_triplet;
use crate::invocation::{Invocation, Resolution};
use crate::paths;

/// Resolve a dependency bootstrap (or `--clean`) run.
pub fn resolve(
    args: &BootstrapArgs,
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

    if args.clean {
        return Ok(Resolution {
            triplet_source: choice.source,
            invocation: Invocation::Clean {
                triplet: choice.triplet,
            },
        });
    }

    let install_root = paths::install_root(&choice.triplet);
    let build_root = paths::short_build_root(platform, &ctx.short_build_root);
    let overlay_ports = paths::overlay_ports(&ctx.project_root)?;

    log::info!("Install root: {install_root}");
    if let Some(build_root) = &build_root {
        log::info!("Build root: {}", build_root.display());
    }

    Ok(Resolution {
        triplet_source: choice.source,
        invocation: Invocation::Bootstrap(BootstrapRequest {
            ports_dir: paths::ports_dir(),
            triplet: choice.triplet,
            build_root,
            install_root,
            overlay_ports,
            clean_after_build: args.clean_after_build,
            ui_enabled: choice.ui_enabled,
        }),
    })
}
