//! Seeding a fresh local store's enabled list from global defaults.

use crate::code::GeckoCode;

/// Produce one `$name` line per bootstrap-enabled global code, in input
/// order. Written as the entire enabled section of a freshly created local
/// store so a first run inherits the global defaults.
pub fn bootstrap_lines(global: &[GeckoCode]) -> Vec<String> {
    global
        .iter()
        .filter(|code| code.bootstrap_enabled)
        .map(|code| format!("${}", code.name))
        .collect()
}
