pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::hist::HistView;
use crate::report::json::render_hist_json;
use crate::report::text::render_report_text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub tsv: PathBuf,
    pub text: PathBuf,
}

pub fn write_reports(view: &HistView, out_dir: &Path) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let paths = ReportPaths {
        json: out_dir.join("hist.json"),
        tsv: out_dir.join("hist.tsv"),
        text: out_dir.join("report.txt"),
    };

    write_text(&paths.json, &render_hist_json(view)?)?;
    write_bars_tsv(view, &paths.tsv)?;
    write_text(&paths.text, &render_report_text(view))?;

    tracing::info!(
        out_dir = %out_dir.display(),
        bars = view.bars.len(),
        "wrote reports"
    );
    Ok(paths)
}

fn write_bars_tsv(view: &HistView, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", ["tissue", "label", "n_cells", "count_text"].join("\t"))?;
    for bar in &view.bars {
        writeln!(
            w,
            "{}\t{}\t{}\t{}",
            bar.tissue, bar.label, bar.n_cells, bar.count_text
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
