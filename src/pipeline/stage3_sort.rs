use crate::model::hist::TissueBucket;

/// Ascending by count, ties by tissue name.
pub fn sort_buckets(buckets: &mut [TissueBucket]) {
    buckets.sort_by(|a, b| match a.n_cells.cmp(&b.n_cells) {
        std::cmp::Ordering::Equal => a.tissue.cmp(&b.tissue),
        other => other,
    });
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_sort.rs"]
mod tests;
