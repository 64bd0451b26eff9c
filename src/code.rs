//! Gecko code data model.

use serde::{Deserialize, Serialize};

/// One address/data pair within a code body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLine {
    /// Target address, parsed from hexadecimal text.
    pub address: u32,

    /// Data word, parsed from hexadecimal text.
    pub data: u32,

    /// Verbatim source text of the line. Write-back emits this instead of
    /// re-rendering the integers, so leading zeros and hex digit case
    /// survive a round trip.
    pub original_line: String,
}

/// A single named cheat code with metadata, notes, and code lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeckoCode {
    /// Identifier, unique within a merged working set.
    pub name: String,

    /// Free-text attribution. May be empty.
    pub creator: String,

    /// Comment lines, in input order.
    pub notes: Vec<String>,

    /// Code body, in input order.
    pub codes: Vec<CodeLine>,

    /// Whether the code is active. Never part of the serialized body; drives
    /// membership in the enabled-names section instead.
    #[serde(default)]
    pub enabled: bool,

    /// Whether the code seeds the enabled section of a freshly created
    /// local store.
    #[serde(default)]
    pub bootstrap_enabled: bool,

    /// True iff the code was parsed from the local (user) store. Only
    /// user-defined code bodies are ever written back.
    #[serde(default)]
    pub user_defined: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let code = GeckoCode {
            name: "Infinite Health".to_string(),
            creator: "Author".to_string(),
            notes: vec!["grants invincibility".to_string()],
            codes: vec![CodeLine {
                address: 0x04000000,
                data: 0x3C000000,
                original_line: "04000000 3C000000".to_string(),
            }],
            enabled: true,
            bootstrap_enabled: false,
            user_defined: true,
        };
        let json = serde_json::to_string(&code).unwrap();
        let back: GeckoCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn test_flags_default_to_false() {
        let json = r#"{"name":"X","creator":"","notes":[],"codes":[]}"#;
        let code: GeckoCode = serde_json::from_str(json).unwrap();
        assert!(!code.enabled);
        assert!(!code.bootstrap_enabled);
        assert!(!code.user_defined);
    }
}
