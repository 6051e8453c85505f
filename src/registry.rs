use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use crate::models::PunctuationSystemTable;
use crate::tables::PUNCTUATION_SYSTEMS;
use crate::PunctuationError;

lazy_static! {
    static ref SYSTEMS_BY_NAME: HashMap<&'static str, &'static PunctuationSystemTable> =
        PUNCTUATION_SYSTEMS.iter().map(|s| (s.name, s)).collect();
}

/// All known punctuation systems, in declaration order.
pub fn all_systems() -> &'static [PunctuationSystemTable] {
    &PUNCTUATION_SYSTEMS
}

/// Looks up the punctuation system with the given name.
pub fn system(name: &str) -> Result<&'static PunctuationSystemTable, PunctuationError> {
    debug!("resolving punctuation system '{}'", name);
    SYSTEMS_BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| PunctuationError::SystemNotFound {
            name: name.to_string(),
        })
}
