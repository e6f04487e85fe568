//! The single delegated call a run ends in.

use anyhow::Result;
use serde::Serialize;
use vcpkg_tools::{BootstrapRequest, BuildRequest, Toolchain, Triplet};

use crate::classify::TripletSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvocationMode {
    Bootstrap,
    Clean,
    BuildDev,
    BuildDist,
}

/// A fully resolved toolchain call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Invocation {
    Bootstrap(BootstrapRequest),
    Clean {
        triplet: Triplet,
    },
    BuildDev(BuildRequest),
    BuildDist {
        request: BuildRequest,
        targets: Vec<String>,
    },
}

impl Invocation {
    pub fn mode(&self) -> InvocationMode {
        match self {
            Self::Bootstrap(_) => InvocationMode::Bootstrap,
            Self::Clean { .. } => InvocationMode::Clean,
            Self::BuildDev(_) => InvocationMode::BuildDev,
            Self::BuildDist { .. } => InvocationMode::BuildDist,
        }
    }

    pub fn triplet(&self) -> &Triplet {
        match self {
            Self::Bootstrap(request) => &request.triplet,
            Self::Clean { triplet } => triplet,
            Self::BuildDev(request) | Self::BuildDist { request, .. } => &request.triplet,
        }
    }

    pub fn dispatch(&self, toolchain: &dyn Toolchain) -> Result<()> {
        match self {
            Self::Bootstrap(request) => toolchain.bootstrap(request),
            Self::Clean { triplet } => toolchain.clean(triplet),
            Self::BuildDev(request) => toolchain.build_project(request),
            Self::BuildDist { request, targets } => {
                toolchain.build_project_release(request, targets)
            }
        }
    }
}

/// What a resolver produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub triplet_source: TripletSource,
    pub invocation: Invocation,
}
