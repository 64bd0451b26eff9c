//! Inverse of the parser: codes back to raw section lines.

use serde::{Deserialize, Serialize};

use crate::code::GeckoCode;

/// Raw lines for both sections of a store, ready for write-back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedCodes {
    /// Lines for the code body section. Only user-defined codes contribute.
    pub body_lines: Vec<String>,

    /// Lines for the enabled-names section. Provenance-independent.
    pub enabled_lines: Vec<String>,
}

/// Serialize a working set back into section lines.
///
/// Enabled names are projected for every code. Bodies are written only for
/// user-defined codes; global bodies already live in the global store and
/// must not be duplicated into the local one. Within a body, notes are
/// grouped after all code lines regardless of their original interleaving;
/// only the relative order among notes, and among code lines, round-trips.
pub fn serialize_codes(codes: &[GeckoCode]) -> SerializedCodes {
    let mut out = SerializedCodes::default();
    for code in codes {
        if code.enabled {
            out.enabled_lines.push(format!("${}", code.name));
        }
        if !code.user_defined {
            continue;
        }

        let mut header = format!("${}", code.name);
        if !code.creator.is_empty() {
            header.push_str(" [");
            header.push_str(&code.creator);
            header.push(']');
        }
        out.body_lines.push(header);

        for line in &code.codes {
            out.body_lines.push(line.original_line.clone());
        }
        for note in &code.notes {
            out.body_lines.push(format!("*{}", note));
        }
    }
    out
}
