//! Working-set merge of global and local code sets.

use std::collections::HashSet;

use crate::code::GeckoCode;

/// Merge global and local codes into a single working set.
///
/// All global codes are kept, in order. A local code is appended only when
/// no code of the same name is already in the working set; on a collision
/// the global side wins and the local code is discarded entirely. Enabled
/// and bootstrap flags are neither consulted nor set here.
pub fn merge_codes(global: Vec<GeckoCode>, local: Vec<GeckoCode>) -> Vec<GeckoCode> {
    let mut working_set = global;
    let mut seen: HashSet<String> = working_set.iter().map(|code| code.name.clone()).collect();
    for code in local {
        if seen.insert(code.name.clone()) {
            working_set.push(code);
        }
    }
    working_set
}
