//! Unit tests for kind-dispatch
//!
//! These tests use mocked collaborators or already-cancelled tokens, so they
//! run fast and never need a Docker daemon.

mod mocks;
mod property_tests;
