pub mod stage1_filter;
pub mod stage2_aggregate;
pub mod stage3_sort;
pub mod stage4_range;
pub mod stage5_labels;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

use crate::model::hist::HistView;
use crate::model::policy::DisplayPolicy;
use crate::model::record::CensusRecord;
use crate::model::selection::Selection;
use crate::pipeline::stage1_filter::filter_records;
use crate::pipeline::stage2_aggregate::{AggregateError, aggregate_by_tissue, total_cells};
use crate::pipeline::stage3_sort::sort_buckets;
use crate::pipeline::stage4_range::{RangeError, derive_range, retain_positive};
use crate::pipeline::stage5_labels::{build_bars, format_thousands};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Reduces the static record set to the chart inputs for one selection.
pub fn run_pipeline(
    records: &[CensusRecord],
    selection: &Selection,
    policy: &DisplayPolicy,
) -> Result<HistView, PipelineError> {
    let filtered = filter_records(records, selection);
    let mut buckets = aggregate_by_tissue(&filtered)?;
    tracing::debug!(
        selection = %selection,
        records = filtered.len(),
        buckets = buckets.len(),
        "aggregated tissue counts"
    );

    let dropped = retain_positive(&mut buckets);
    if !dropped.is_empty() {
        tracing::warn!(
            selection = %selection,
            tissues = %dropped.join(", "),
            "dropping zero-count tissues before range derivation"
        );
    }

    sort_buckets(&mut buckets);

    let counts = buckets.iter().map(|b| b.n_cells).collect::<Vec<_>>();
    let range = derive_range(&counts, policy)?;
    let total = total_cells(&counts)?;
    let bars = build_bars(&buckets, policy);

    Ok(HistView {
        selection: selection.clone(),
        suggested_height: policy.bar_height_px * bars.len(),
        bars,
        total_cells: total,
        total_text: format_thousands(total),
        range,
    })
}

/// Memoizes views by selection over one borrowed dataset.
pub struct HistCache<'a> {
    records: &'a [CensusRecord],
    policy: DisplayPolicy,
    views: HashMap<Selection, HistView>,
}

impl<'a> HistCache<'a> {
    pub fn new(records: &'a [CensusRecord], policy: DisplayPolicy) -> Self {
        Self {
            records,
            policy,
            views: HashMap::new(),
        }
    }

    pub fn view(&mut self, selection: &Selection) -> Result<&HistView, PipelineError> {
        match self.views.entry(selection.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let view = run_pipeline(self.records, selection, &self.policy)?;
                Ok(entry.insert(view))
            }
        }
    }

    pub fn cached_views(&self) -> usize {
        self.views.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
