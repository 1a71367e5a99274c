use std::path::Path;

use thiserror::Error;

pub mod source;

use crate::model::record::CensusRecord;
use crate::model::versions::CensusVersions;
use source::read_dataset_bytes;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static record set plus the census catalogue derived from it once.
#[derive(Debug, Clone)]
pub struct CensusDataset {
    pub records: Vec<CensusRecord>,
    pub versions: CensusVersions,
}

impl CensusDataset {
    pub fn from_records(records: Vec<CensusRecord>) -> Self {
        let versions = CensusVersions::from_records(&records);
        Self {
            records,
            versions,
        }
    }
}

pub fn load_dataset(path: &Path) -> Result<CensusDataset, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "dataset not found: {}",
            path.display()
        )));
    }
    let bytes = read_dataset_bytes(path)?;
    let records = parse_records(&bytes)?;
    let dataset = CensusDataset::from_records(records);

    tracing::info!(
        path = %path.display(),
        records = dataset.records.len(),
        versions = dataset.versions.as_slice().len(),
        "loaded census tissue dataset"
    );
    Ok(dataset)
}

pub fn parse_records(bytes: &[u8]) -> Result<Vec<CensusRecord>, InputError> {
    let records: Vec<CensusRecord> = serde_json::from_slice(bytes)?;
    if records.is_empty() {
        return Err(InputError::InvalidInput(
            "dataset contains no records".to_string(),
        ));
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
