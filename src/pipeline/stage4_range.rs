use thiserror::Error;

use crate::model::hist::{AxisRange, TissueBucket};
use crate::model::policy::DisplayPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("non-positive cell count at position {index}; log axis is undefined")]
    NonPositiveCount { index: usize },
}

/// `[log10(min) - pad_low, log10(max) + pad_high]`, or `None` for no counts.
pub fn derive_range(
    counts: &[u64],
    policy: &DisplayPolicy,
) -> Result<Option<AxisRange>, RangeError> {
    if let Some(index) = counts.iter().position(|&c| c == 0) {
        return Err(RangeError::NonPositiveCount { index });
    }
    let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
        return Ok(None);
    };
    Ok(Some(AxisRange {
        lo: (min as f64).log10() - policy.range_pad_low,
        hi: (max as f64).log10() + policy.range_pad_high,
    }))
}

/// Removes zero-count buckets and returns their tissue names.
pub fn retain_positive(buckets: &mut Vec<TissueBucket>) -> Vec<String> {
    let mut dropped = Vec::new();
    buckets.retain(|b| {
        if b.n_cells == 0 {
            dropped.push(b.tissue.clone());
            false
        } else {
            true
        }
    });
    dropped
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_range.rs"]
mod tests;
