mod rules;

use std::collections::BTreeMap;

use crate::mora::MoraMap;

/// Build a table from literal pairs: two-character keys become digraphs.
pub(super) fn make_map(entries: &[(&str, &str)]) -> MoraMap {
    entries.iter().copied().collect()
}

pub(super) fn mono_only(entries: &[(&str, &str)]) -> MoraMap {
    let mono: BTreeMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    MoraMap::new(BTreeMap::new(), mono)
}
