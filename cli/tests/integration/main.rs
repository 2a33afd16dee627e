//! Integration tests for kind-dispatch
//!
//! These tests spawn the actual binary and test end-to-end behavior against a
//! scripted stand-in for kind.
