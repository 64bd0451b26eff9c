//! Gecko cheat code configuration core.
//!
//! Parses, merges, and serializes the line-based Gecko code record format
//! stored inside two layered sectioned text stores: a global/shared store
//! and a user-local override store. Two independent per-code states,
//! enabled and bootstrap-enabled, live in a separate section of each store,
//! and global default-enabled state seeds a freshly created local store.
//!
//! The pure transformations (`parse_lines`, `merge_codes`, `mark_enabled`,
//! `mark_bootstrap`, `bootstrap_lines`, `serialize_codes`) operate on plain
//! line/code sequences. The store-level functions below compose them over a
//! [`SectionStore`] collaborator.

mod bootstrap;
mod code;
mod mark;
mod merge;
mod parse;
mod serialize;
mod store;

pub use bootstrap::bootstrap_lines;
pub use code::{CodeLine, GeckoCode};
pub use mark::{mark_bootstrap, mark_enabled};
pub use merge::merge_codes;
pub use parse::{parse_lines, CodeOrigin, ParseOutcome, ParseWarning};
pub use serialize::{serialize_codes, SerializedCodes};
pub use store::{MemoryStore, SectionStore, StoreError, CODE_SECTION, ENABLED_SECTION};

/// Parse the code section of one store.
pub fn load_codes(
    store: &dyn SectionStore,
    origin: CodeOrigin,
) -> Result<ParseOutcome, StoreError> {
    Ok(parse_lines(&store.get_lines(CODE_SECTION)?, origin))
}

/// Parse both stores and merge them into a working set.
///
/// Enabled and bootstrap flags are not read here; apply them afterwards with
/// [`mark_enabled_codes`] and [`mark_bootstrap_codes`].
pub fn merge_stores(
    global: &dyn SectionStore,
    local: &dyn SectionStore,
) -> Result<Vec<GeckoCode>, StoreError> {
    let global_codes = load_codes(global, CodeOrigin::Global)?.codes;
    let local_codes = load_codes(local, CodeOrigin::User)?.codes;
    Ok(merge_codes(global_codes, local_codes))
}

/// Mark codes enabled from a store's enabled section.
pub fn mark_enabled_codes(
    store: &dyn SectionStore,
    codes: &mut [GeckoCode],
) -> Result<(), StoreError> {
    mark_enabled(&store.get_lines(ENABLED_SECTION)?, codes);
    Ok(())
}

/// Mark codes bootstrap-enabled from the global store's enabled section.
pub fn mark_bootstrap_codes(
    store: &dyn SectionStore,
    codes: &mut [GeckoCode],
) -> Result<(), StoreError> {
    mark_bootstrap(&store.get_lines(ENABLED_SECTION)?, codes);
    Ok(())
}

/// Seed a freshly created local store's enabled section from the
/// bootstrap-enabled global codes, replacing whatever was there.
pub fn bootstrap_local_store(
    local: &mut dyn SectionStore,
    global_codes: &[GeckoCode],
) -> Result<(), StoreError> {
    local.set_lines(ENABLED_SECTION, bootstrap_lines(global_codes))
}

/// Write a working set back to a store, replacing both sections.
pub fn save_codes(store: &mut dyn SectionStore, codes: &[GeckoCode]) -> Result<(), StoreError> {
    let serialized = serialize_codes(codes);
    store.set_lines(CODE_SECTION, serialized.body_lines)?;
    store.set_lines(ENABLED_SECTION, serialized.enabled_lines)
}
