use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::record::{CensusRecord, CensusVersion, Species};

/// Tri-state primary/secondary constraint. Stored and serialized as
/// `Option<bool>` where `None` means no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum PrimaryFilter {
    All,
    Primary,
    Secondary,
}

impl PrimaryFilter {
    pub fn from_option(value: Option<bool>) -> Self {
        match value {
            None => PrimaryFilter::All,
            Some(true) => PrimaryFilter::Primary,
            Some(false) => PrimaryFilter::Secondary,
        }
    }

    pub fn as_option(self) -> Option<bool> {
        match self {
            PrimaryFilter::All => None,
            PrimaryFilter::Primary => Some(true),
            PrimaryFilter::Secondary => Some(false),
        }
    }

    pub fn matches(self, is_primary: bool) -> bool {
        self.as_option().is_none_or(|want| want == is_primary)
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimaryFilter::All => "All",
            PrimaryFilter::Primary => "Primary",
            PrimaryFilter::Secondary => "Secondary",
        }
    }
}

impl From<Option<bool>> for PrimaryFilter {
    fn from(value: Option<bool>) -> Self {
        Self::from_option(value)
    }
}

impl From<PrimaryFilter> for Option<bool> {
    fn from(value: PrimaryFilter) -> Self {
        value.as_option()
    }
}

impl fmt::Display for PrimaryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid primary filter `{0}` (use all|primary|secondary)")]
pub struct ParsePrimaryFilterError(pub String);

impl FromStr for PrimaryFilter {
    type Err = ParsePrimaryFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "any" => Ok(PrimaryFilter::All),
            "primary" | "true" => Ok(PrimaryFilter::Primary),
            "secondary" | "false" => Ok(PrimaryFilter::Secondary),
            _ => Err(ParsePrimaryFilterError(s.to_string())),
        }
    }
}

/// The three facets a histogram is computed for. Also the memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub species: Species,
    pub census: CensusVersion,
    #[serde(rename = "isPrimary")]
    pub primary: PrimaryFilter,
}

impl Selection {
    pub fn new(species: Species, census: CensusVersion, primary: PrimaryFilter) -> Self {
        Self {
            species,
            census,
            primary,
        }
    }

    pub fn matches(&self, record: &CensusRecord) -> bool {
        record.species == self.species
            && record.census == self.census
            && self.primary.matches(record.is_primary)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.census,
            self.species.display_name(),
            self.primary.label()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/selection.rs"]
mod tests;
