//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::collections::BTreeMap;

/// Build an in-memory environment from name/value pairs.
#[must_use]
pub fn env_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
