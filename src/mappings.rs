//! Legacy TFM rename table
//!
//! Maps the pre-netstandard target framework monikers (`dotnet`,
//! `dotnet5.x`, `dnxcore50`) to the standardized names that replaced them.
//! The table is fixed at build time; lookups ignore case, matching how
//! NuGet treated monikers in project.json.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Legacy moniker -> canonical moniker. Keys are stored lowercase; go
/// through [`canonical_tfm`] for the case-insensitive lookup.
static TFM_MAPPINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("dotnet", "netstandard1.3"),
        ("dotnet5.1", "netstandard1.0"),
        ("dotnet51", "netstandard1.0"),
        ("dotnet5.2", "netstandard1.1"),
        ("dotnet52", "netstandard1.1"),
        ("dotnet5.3", "netstandard1.2"),
        ("dotnet53", "netstandard1.2"),
        ("dotnet5.4", "netstandard1.3"),
        ("dotnet54", "netstandard1.3"),
        ("dotnet5.5", "netstandard1.4"),
        ("dotnet55", "netstandard1.4"),
        ("dotnet5.6", "netstandard1.5"),
        ("dotnet56", "netstandard1.5"),
        ("dnxcore50", "netstandardapp1.5"),
    ])
});

/// Look up the canonical moniker for a legacy TFM, ignoring case.
///
/// Returns `None` for anything not in the rename table, including names
/// that are already canonical (`netstandard1.3` never maps to itself).
pub fn canonical_tfm(name: &str) -> Option<&'static str> {
    TFM_MAPPINGS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_legacy_monikers() {
        assert_eq!(canonical_tfm("dotnet"), Some("netstandard1.3"));
        assert_eq!(canonical_tfm("dotnet5.1"), Some("netstandard1.0"));
        assert_eq!(canonical_tfm("dotnet56"), Some("netstandard1.5"));
        assert_eq!(canonical_tfm("dnxcore50"), Some("netstandardapp1.5"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(canonical_tfm("DotNet"), Some("netstandard1.3"));
        assert_eq!(canonical_tfm("DNXCORE50"), Some("netstandardapp1.5"));
        assert_eq!(canonical_tfm("Dotnet5.4"), Some("netstandard1.3"));
    }

    #[test]
    fn test_canonical_names_are_not_remapped() {
        // Keeps a second run over the same file a no-op.
        assert_eq!(canonical_tfm("netstandard1.3"), None);
        assert_eq!(canonical_tfm("netstandardapp1.5"), None);
    }

    #[test]
    fn test_unknown_monikers() {
        assert_eq!(canonical_tfm("net45"), None);
        assert_eq!(canonical_tfm(""), None);
    }
}
