//! Application services: use-case orchestration.
//!
//! Services import only from `crate::domain` and `crate::application::ports`
//! and never from `crate::infra`, `crate::commands`, or `crate::output`.

pub mod binary;
pub mod dispatcher;
