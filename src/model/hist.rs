use serde::Serialize;

use crate::model::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TissueBucket {
    pub tissue: String,
    pub n_cells: u64,
}

/// Log10 bounds of the count axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub lo: f64,
    pub hi: f64,
}

impl AxisRange {
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lo, self.hi]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub tissue: String,
    pub label: String,
    pub count_text: String,
    pub n_cells: u64,
}

/// Everything a bar chart needs for one selection. Bars are ascending by
/// count; `range` is `None` when there is nothing to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistView {
    pub selection: Selection,
    pub bars: Vec<Bar>,
    pub total_cells: u64,
    pub total_text: String,
    pub range: Option<AxisRange>,
    pub suggested_height: usize,
}
