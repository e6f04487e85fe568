//! # vcpkg-tools
//!
//! Drives a vcpkg checkout and CMake on behalf of the E-MAP front ends.
//!
//! ## Entry points
//!
//! - [`Toolchain`]: the operations a front end delegates to (bootstrap, clean,
//!   dev build, release build, triplet prompt).
//! - [`Vcpkg`]: the concrete driver, rooted at one vcpkg checkout.
//! - [`ToolchainProvider`]: picks which checkout to use (local or parent sibling).
//! - [`args`]: argument groups shared by the front-end binaries.

pub mod args;
mod cmake;
pub mod error;
pub mod interrupt;
pub mod logger;
pub mod process;
pub mod toolchain;
pub mod triplet;
mod vcpkg;

pub use cmake::OVERLAY_PORTS_ENV;
pub use error::{is_interrupted, Interrupted, FAILURE_EXIT_CODE, INTERRUPTED_NOTICE};
pub use toolchain::{BootstrapRequest, BuildConfig, BuildRequest, Toolchain, ToolchainProvider};
pub use triplet::Triplet;
pub use vcpkg::Vcpkg;
