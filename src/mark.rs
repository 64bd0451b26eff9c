//! Flag marking from an enabled-names line list.
//!
//! The enabled section of a store holds one `$name` line per active code.
//! These operations cross-reference such a list against an already-parsed
//! code set; which store the list came from is the caller's business.

use crate::code::GeckoCode;

/// Set `enabled` on every code whose name appears as a `$name` line.
///
/// Every matching code is flagged, not just the first: duplicate names are
/// legal within a single store and all of them activate together.
pub fn mark_enabled(enabled_lines: &[String], codes: &mut [GeckoCode]) {
    mark(enabled_lines, codes, |code| code.enabled = true);
}

/// Set `bootstrap_enabled` on every code whose name appears as a `$name`
/// line. Sourced from the global store's enabled section by convention.
pub fn mark_bootstrap(enabled_lines: &[String], codes: &mut [GeckoCode]) {
    mark(enabled_lines, codes, |code| code.bootstrap_enabled = true);
}

fn mark(lines: &[String], codes: &mut [GeckoCode], set: fn(&mut GeckoCode)) {
    for line in lines {
        // Empty lines and unknown prefixes are ignored so future line types
        // can share the section.
        let name = match line.strip_prefix('$') {
            Some(name) => name,
            None => continue,
        };
        for code in codes.iter_mut() {
            if code.name == name {
                set(code);
            }
        }
    }
}
