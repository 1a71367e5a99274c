use serde::Serialize;

use crate::model::hist::{Bar, HistView};
use crate::model::selection::Selection;

#[derive(Debug, Serialize)]
struct ToolMeta {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct HistSummary<'a> {
    tool: ToolMeta,
    selection: &'a Selection,
    total_cells: u64,
    total_text: &'a str,
    range: Option<[f64; 2]>,
    suggested_height: usize,
    bars: &'a [Bar],
}

pub fn render_hist_json(view: &HistView) -> serde_json::Result<String> {
    let summary = HistSummary {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
        selection: &view.selection,
        total_cells: view.total_cells,
        total_text: &view.total_text,
        range: view.range.map(|r| r.as_pair()),
        suggested_height: view.suggested_height,
        bars: &view.bars,
    };
    serde_json::to_string_pretty(&summary)
}
