//! # E-MAP build front ends
//!
//! Resolves the vcpkg triplet, install root, build directory and overlay ports
//! for the host platform, then hands a single request to the vcpkg/CMake
//! toolchain.
//!
//! ```bash
//! bootstrap                         # Fetch + build third-party dependencies
//! bootstrap --clean                 # Drop previous dependency build output
//! build-emap --build-config Debug   # Incremental development build
//! build-emap --dist --run-tests     # Package build
//! ```

pub mod app;
pub mod classify;
pub mod cli;
pub mod invocation;
pub mod paths;
pub mod platform;
pub mod tasks;
