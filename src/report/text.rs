use crate::model::hist::HistView;

/// Header line, axis line and one row per bar, largest first.
pub fn render_report_text(view: &HistView) -> String {
    let mut out = String::new();

    out.push_str("CELLxGENE Census Cell-Tissue Counts\n");
    out.push_str("===================================\n\n");
    out.push_str(&format!("{} | {} cells\n", view.selection, view.total_text));

    let Some(range) = view.range else {
        out.push_str("no data to display\n");
        return out;
    };
    out.push_str(&format!("log10 axis: [{:.3}, {:.3}]\n", range.lo, range.hi));
    out.push_str(&format!("tissues: {}\n\n", view.bars.len()));

    let width = view
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);
    for bar in view.bars.iter().rev() {
        let pad = width - bar.label.chars().count();
        out.push_str(&format!(
            "{}{}{:>6}  {}\n",
            " ".repeat(pad),
            bar.label,
            bar.count_text,
            bar.n_cells
        ));
    }

    out
}
