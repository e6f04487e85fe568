//! Top-level flow of both binaries and the exit-code mapping.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use vcpkg_tools::args::CommonArgs;
use vcpkg_tools::{
    interrupt, is_interrupted, logger, Toolchain, ToolchainProvider, Vcpkg, FAILURE_EXIT_CODE,
    INTERRUPTED_NOTICE,
};

use crate::cli::{BootstrapCli, BuildCli};
use crate::invocation::Resolution;
use crate::paths;
use crate::platform::PlatformId;
use crate::tasks::{self, ResolveContext};

/// What `--dry-run` prints.
#[derive(Debug, Serialize)]
pub struct Plan<'a> {
    pub platform: &'a PlatformId,
    pub toolchain: ToolchainProvider,
    pub vcpkg_root: PathBuf,
    #[serde(flatten)]
    pub resolution: &'a Resolution,
}

pub fn run_bootstrap(cli: BootstrapCli) -> Result<()> {
    let (ctx, provider, toolchain) = start(&cli.common, cli.args.parent)?;
    let resolution = tasks::bootstrap::resolve(&cli.args, &ctx, &toolchain)?;
    execute(&ctx, provider, &toolchain, &resolution, cli.common.dry_run)
}

pub fn run_build(cli: BuildCli) -> Result<()> {
    let (ctx, provider, toolchain) = start(&cli.common, cli.args.parent)?;
    let resolution = tasks::build::resolve(&cli.args, cli.build_config, &ctx, &toolchain)?;
    execute(&ctx, provider, &toolchain, &resolution, cli.common.dry_run)
}

fn start(common: &CommonArgs, parent: bool) -> Result<(ResolveContext, ToolchainProvider, Vcpkg)> {
    logger::init(common.log_level())?;
    interrupt::install_handler()?;

    let ctx = ResolveContext::detect(common.platform.clone())?;
    let provider = ToolchainProvider::from_parent_flag(parent);
    let toolchain = provider
        .open(&ctx.project_root)
        .with_buildtrees_root(paths::short_build_root(ctx.platform(), &ctx.short_build_root));
    log::debug!("Project root: {}", ctx.project_root.display());
    log::debug!("Toolchain: {provider:?} at {}", toolchain.root().display());
    Ok((ctx, provider, toolchain))
}

fn execute(
    ctx: &ResolveContext,
    provider: ToolchainProvider,
    toolchain: &Vcpkg,
    resolution: &Resolution,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        let plan = Plan {
            platform: &ctx.platform_id,
            toolchain: provider,
            vcpkg_root: toolchain.root().to_path_buf(),
            resolution,
        };
        println!("{}", render_plan(&plan)?);
        return Ok(());
    }

    log::info!("Mode: {:?}", resolution.invocation.mode());
    dispatch(resolution, toolchain)
}

/// Run the resolved call against `toolchain`.
pub fn dispatch(resolution: &Resolution, toolchain: &dyn Toolchain) -> Result<()> {
    resolution.invocation.dispatch(toolchain)
}

pub fn render_plan(plan: &Plan<'_>) -> Result<String> {
    serde_json::to_string_pretty(plan).context("Serializing plan")
}

/// Print the outcome to `out` and return the process exit code.
pub fn report(result: &Result<()>, out: &mut impl Write) -> i32 {
    let message = match result {
        Ok(()) => return 0,
        Err(err) if is_interrupted(err) => INTERRUPTED_NOTICE.to_string(),
        Err(err) => format!("{err:#}"),
    };
    // Nothing sensible is left to do if stdout is gone.
    let _ = writeln!(out, "{message}");
    FAILURE_EXIT_CODE
}

/// Exit the process with the code [`report`] picks.
pub fn finish(result: Result<()>) -> ! {
    let code = report(&result, &mut std::io::stdout());
    std::process::exit(code)
}
