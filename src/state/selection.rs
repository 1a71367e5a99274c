use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::record::{CensusVersion, Species};
use crate::model::selection::{PrimaryFilter, Selection};
use crate::model::versions::CensusVersions;
use crate::state::{StateError, StateStore};

pub const KEY_SPECIES: &str = "species";
pub const KEY_CENSUS: &str = "census";
pub const KEY_IS_PRIMARY: &str = "isPrimary";

pub const DEFAULT_SPECIES: Species = Species::HomoSapiens;
pub const DEFAULT_PRIMARY: PrimaryFilter = PrimaryFilter::Primary;

/// Values given explicitly for this invocation; they win over the store.
#[derive(Debug, Clone, Default)]
pub struct SelectionOverrides {
    pub species: Option<Species>,
    pub census: Option<CensusVersion>,
    pub primary: Option<PrimaryFilter>,
}

/// Override, then stored value, then default. A stored census missing from
/// the catalogue falls back to the latest release; an explicit one is kept.
pub fn resolve_selection(
    store: &dyn StateStore,
    versions: &CensusVersions,
    overrides: &SelectionOverrides,
) -> Result<Selection, StateError> {
    let species = overrides
        .species
        .or_else(|| stored::<Species>(store, KEY_SPECIES))
        .unwrap_or(DEFAULT_SPECIES);

    let census = match &overrides.census {
        Some(census) => census.clone(),
        None => match stored::<CensusVersion>(store, KEY_CENSUS) {
            Some(census) if versions.contains(&census) => census,
            Some(stale) => {
                tracing::warn!(census = %stale, "stored census not in dataset; using latest");
                versions.latest().cloned().ok_or(StateError::NoCensus)?
            }
            None => versions.latest().cloned().ok_or(StateError::NoCensus)?,
        },
    };

    // `null` is a real value here ("All"), so only a missing key means default.
    let primary = match overrides.primary {
        Some(primary) => primary,
        None => match store.get(KEY_IS_PRIMARY) {
            Some(value) => decode::<Option<bool>>(KEY_IS_PRIMARY, value)
                .map(PrimaryFilter::from_option)
                .unwrap_or(DEFAULT_PRIMARY),
            None => DEFAULT_PRIMARY,
        },
    };

    Ok(Selection::new(species, census, primary))
}

pub fn persist_selection(
    store: &mut dyn StateStore,
    selection: &Selection,
) -> Result<(), StateError> {
    store.set(KEY_SPECIES, serde_json::to_value(selection.species)?)?;
    store.set(KEY_CENSUS, serde_json::to_value(&selection.census)?)?;
    store.set(KEY_IS_PRIMARY, serde_json::to_value(selection.primary)?)?;
    Ok(())
}

/// Forgets the stored selection so the next resolve starts from defaults.
pub fn clear_selection(store: &mut dyn StateStore) -> Result<(), StateError> {
    for key in [KEY_SPECIES, KEY_CENSUS, KEY_IS_PRIMARY] {
        store.remove(key)?;
    }
    Ok(())
}

fn stored<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    store.get(key).and_then(|value| decode(key, value))
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring invalid stored value");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/state/selection.rs"]
mod tests;
