use crate::model::record::CensusRecord;
use crate::model::selection::Selection;

/// Records matching species and census exactly, and the primary flag unless
/// the selection is `All`. Input order is preserved.
pub fn filter_records<'a>(
    records: &'a [CensusRecord],
    selection: &Selection,
) -> Vec<&'a CensusRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
