//! Section store collaborator boundary.
//!
//! Codes live inside a sectioned text store owned by the caller (an INI-like
//! file in practice). This module abstracts the two operations the crate
//! needs and ships an in-memory implementation for callers and tests.

use std::collections::HashMap;

/// Section holding code bodies.
pub const CODE_SECTION: &str = "Gecko";

/// Section holding `$name` enabled markers.
pub const ENABLED_SECTION: &str = "Gecko_Enabled";

/// Error surfaced by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend failed to read or write a section.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A named-section text store.
///
/// Sections hold ordered raw lines. Reading an absent section yields an
/// empty sequence; writing a section fully replaces its prior contents.
pub trait SectionStore {
    /// Raw lines of `section`, empty if the section is absent.
    fn get_lines(&self, section: &str) -> Result<Vec<String>, StoreError>;

    /// Replace the contents of `section` with `lines`.
    fn set_lines(&mut self, section: &str, lines: Vec<String>) -> Result<(), StoreError>;
}

/// In-memory section store. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sections: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a section from string literals.
    pub fn with_section(mut self, section: &str, lines: &[&str]) -> Self {
        self.sections.insert(
            section.to_string(),
            lines.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl SectionStore for MemoryStore {
    fn get_lines(&self, section: &str) -> Result<Vec<String>, StoreError> {
        Ok(self.sections.get(section).cloned().unwrap_or_default())
    }

    fn set_lines(&mut self, section: &str, lines: Vec<String>) -> Result<(), StoreError> {
        self.sections.insert(section.to_string(), lines);
        Ok(())
    }
}
