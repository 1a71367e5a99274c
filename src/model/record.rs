use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    HomoSapiens,
    MusMusculus,
}

impl Species {
    pub fn as_str(self) -> &'static str {
        match self {
            Species::HomoSapiens => "homo_sapiens",
            Species::MusMusculus => "mus_musculus",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Species::HomoSapiens => "Human",
            Species::MusMusculus => "Mouse",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown species `{0}` (use homo_sapiens|mus_musculus)")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homo_sapiens" | "human" => Ok(Species::HomoSapiens),
            "mus_musculus" | "mouse" => Ok(Species::MusMusculus),
            _ => Err(ParseSpeciesError(s.to_string())),
        }
    }
}

/// Census release identifier, a `YYYY-MM-DD` stamp. Lexicographic order on
/// that format is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CensusVersion(String);

impl CensusVersion {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CensusVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CensusVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusRecord {
    pub species: Species,
    pub census: CensusVersion,
    pub tissue: String,
    pub is_primary: bool,
    pub n_cells: u64,
}
