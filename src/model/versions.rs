use std::collections::BTreeSet;

use crate::model::record::{CensusRecord, CensusVersion};

/// Distinct census releases present in a dataset, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensusVersions {
    versions: Vec<CensusVersion>,
}

impl CensusVersions {
    pub fn from_records(records: &[CensusRecord]) -> Self {
        let distinct: BTreeSet<&CensusVersion> = records.iter().map(|r| &r.census).collect();
        Self {
            versions: distinct.into_iter().cloned().collect(),
        }
    }

    pub fn latest(&self) -> Option<&CensusVersion> {
        self.versions.last()
    }

    pub fn contains(&self, version: &CensusVersion) -> bool {
        self.versions.binary_search(version).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CensusVersion> {
        self.versions.iter()
    }

    pub fn as_slice(&self) -> &[CensusVersion] {
        &self.versions
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/versions.rs"]
mod tests;
