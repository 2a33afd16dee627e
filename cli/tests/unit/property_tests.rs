//! Property-based tests for platform resolution and `kind get clusters`
//! parsing.
//!
//! Uses `proptest` to verify invariants across many random inputs.

use proptest::prelude::*;

use kind_dispatch::domain::{BinaryName, DispatchError, PlatformKey, parse_cluster_list, resolve};

// ============================================================================
// resolve() property tests
// ============================================================================

const SUPPORTED: &[(&str, &str, &str, BinaryName)] = &[
    ("macos", "x86_64", "osx", BinaryName::OsxX64),
    ("macos", "aarch64", "osx", BinaryName::OsxArm64),
    ("linux", "x86_64", "linux", BinaryName::LinuxX64),
    ("linux", "aarch64", "linux", BinaryName::LinuxArm64),
    ("windows", "x86_64", "win", BinaryName::WinX64),
];

proptest! {
    /// Every supported tuple resolves to its binary, whatever follows the
    /// runtime identifier family.
    #[test]
    fn prop_supported_tuples_resolve(
        idx in 0..SUPPORTED.len(),
        suffix in "(-[a-z0-9]{1,8}){0,2}",
    ) {
        let (os, arch, family, expected) = SUPPORTED[idx];
        let key = PlatformKey::new(os, arch, format!("{family}{suffix}"));
        prop_assert_eq!(resolve(&key).ok(), Some(expected));
    }

    /// OS names outside the supported families are always rejected, and the
    /// error names the observed os/arch.
    #[test]
    fn prop_unknown_os_rejected(
        os in "[a-z]{3,10}",
        arch in prop_oneof![Just("x86_64"), Just("aarch64")],
    ) {
        prop_assume!(!matches!(
            os.as_str(),
            "macos" | "osx" | "darwin" | "linux" | "windows" | "win"
        ));
        let key = PlatformKey::new(os.clone(), arch, format!("{os}-x64"));
        match resolve(&key) {
            Err(DispatchError::UnsupportedPlatform { os: got_os, arch: got_arch }) => {
                prop_assert_eq!(got_os, os);
                prop_assert_eq!(got_arch, arch);
            }
            other => prop_assert!(false, "expected UnsupportedPlatform, got {:?}", other),
        }
    }

    /// Architectures outside x64/arm64 are always rejected.
    #[test]
    fn prop_unknown_arch_rejected(
        os in prop_oneof![Just("macos"), Just("linux"), Just("windows")],
        arch in "(riscv64|s390x|powerpc64|x86|arm|mips64)",
    ) {
        let key = PlatformKey::new(os, arch.clone(), format!("linux-{arch}"));
        let is_unsupported = matches!(resolve(&key), Err(DispatchError::UnsupportedPlatform { .. }));
        prop_assert!(is_unsupported);
    }
}

#[test]
fn test_windows_arm64_is_unsupported() {
    let key = PlatformKey::new("windows", "aarch64", "win-arm64");
    assert!(matches!(
        resolve(&key),
        Err(DispatchError::UnsupportedPlatform { .. })
    ));
}

#[test]
fn test_table_file_names() {
    let names: Vec<_> = SUPPORTED.iter().map(|s| s.3.file_name()).collect();
    assert_eq!(
        names,
        vec![
            "kind-osx-x64",
            "kind-osx-arm64",
            "kind-linux-x64",
            "kind-linux-arm64",
            "kind-win-x64.exe",
        ]
    );
}

// ============================================================================
// parse_cluster_list() property tests
// ============================================================================

proptest! {
    /// Parsing keeps every non-empty name, in order, regardless of blank
    /// lines between them.
    #[test]
    fn prop_parse_keeps_non_empty_names_in_order(
        names in prop::collection::vec("[a-z][a-z0-9-]{0,15}", 0..8),
        blanks in prop::collection::vec(0usize..3, 0..8),
    ) {
        let mut output = String::new();
        for (i, name) in names.iter().enumerate() {
            let extra = blanks.get(i).copied().unwrap_or(0);
            output.push_str(&"\n".repeat(extra));
            output.push_str(name);
            output.push('\n');
        }
        prop_assert_eq!(parse_cluster_list(&output), names);
    }

    /// No parsed entry is ever empty.
    #[test]
    fn prop_parse_never_yields_empty_entries(output in "[a-z\n]{0,64}") {
        prop_assert!(parse_cluster_list(&output).iter().all(|n| !n.is_empty()));
    }
}
