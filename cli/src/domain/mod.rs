//! Domain layer: pure types, lookup tables, and parsing.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod cluster;
pub mod error;
pub mod platform;

pub use cluster::{ExecutionResult, Verb, control_plane_container, parse_cluster_list};
pub use error::DispatchError;
pub use platform::{BinaryName, PlatformKey, resolve};
