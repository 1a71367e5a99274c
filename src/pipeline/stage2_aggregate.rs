use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::hist::TissueBucket;
use crate::model::record::CensusRecord;
use crate::model::tissue::title_case;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("cell count overflow while summing tissue `{tissue}`")]
    TissueOverflow { tissue: String },
    #[error("cell count overflow while summing the selection total")]
    TotalOverflow,
}

pub fn tissue_totals(
    records: &[&CensusRecord],
) -> Result<BTreeMap<String, u64>, AggregateError> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        let tissue = title_case(&record.tissue);
        let slot = totals.entry(tissue).or_insert(0);
        *slot = slot.checked_add(record.n_cells).ok_or_else(|| {
            AggregateError::TissueOverflow {
                tissue: title_case(&record.tissue),
            }
        })?;
    }
    Ok(totals)
}

/// One bucket per normalized tissue name, in name order.
pub fn aggregate_by_tissue(
    records: &[&CensusRecord],
) -> Result<Vec<TissueBucket>, AggregateError> {
    Ok(tissue_totals(records)?
        .into_iter()
        .map(|(tissue, n_cells)| TissueBucket { tissue, n_cells })
        .collect())
}

pub fn total_cells(counts: &[u64]) -> Result<u64, AggregateError> {
    counts
        .iter()
        .try_fold(0u64, |acc, &c| acc.checked_add(c))
        .ok_or(AggregateError::TotalOverflow)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
