//! Resolvers: flags + host context in, one [`crate::invocation::Invocation`] out.

pub mod bootstrap;
pub mod build;

use anyhow::Result;
use std::path::PathBuf;

use crate::paths;
use crate::platform::{Platform, PlatformId};

/// Everything a resolver reads from outside its flags.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    pub platform_id: PlatformId,
    pub project_root: PathBuf,
    /// Candidate short build root; only used if it exists.
    pub short_build_root: PathBuf,
}

impl ResolveContext {
    /// Context for this machine. `platform` overrides host detection.
    pub fn detect(platform: Option<String>) -> Result<Self> {
        Ok(Self {
            platform_id: platform.map_or_else(PlatformId::host, PlatformId::new),
            project_root: paths::project_root()?,
            short_build_root: PathBuf::from(paths::SHORT_BUILD_ROOT),
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform_id.platform()
    }
}
