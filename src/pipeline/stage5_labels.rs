use crate::model::hist::{Bar, TissueBucket};
use crate::model::policy::DisplayPolicy;

const SIGNIFICANT_DIGITS: u32 = 3;

pub fn build_bars(buckets: &[TissueBucket], policy: &DisplayPolicy) -> Vec<Bar> {
    buckets
        .iter()
        .map(|b| Bar {
            tissue: b.tissue.clone(),
            label: elide_label(&b.tissue, policy.elide_at),
            count_text: humanize(b.n_cells),
            n_cells: b.n_cells,
        })
        .collect()
}

/// Axis tick text. Names longer than `elide_at + 1` characters are cut to
/// `elide_at` plus an ellipsis; every label gets one trailing space.
pub fn elide_label(tissue: &str, elide_at: usize) -> String {
    let mut label = if tissue.chars().count() > elide_at.saturating_add(1) {
        let mut cut = tissue.chars().take(elide_at).collect::<String>();
        cut.push('…');
        cut
    } else {
        tissue.to_string()
    };
    label.push(' ');
    label
}

/// Short magnitude text: `999`, `1.00k`, `950k`, `1.23M`. Rounds the count
/// to three significant digits, half-up, in exact integer arithmetic.
pub fn humanize(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let (digits, shift) = round_significant(n);
    // 999_500.. would read "1000k"
    if n >= 1_000_000 || shift_value(digits, shift) >= 1_000_000 {
        return format!("{}M", place_point(digits, shift, 6));
    }
    format!("{}k", place_point(digits, shift, 3))
}

/// `n` rounded to `SIGNIFICANT_DIGITS`, as `digits * 10^shift`.
fn round_significant(n: u64) -> (u128, u32) {
    let n = n as u128;
    let width = n.to_string().len() as u32;
    if width <= SIGNIFICANT_DIGITS {
        return (n, 0);
    }
    let mut shift = width - SIGNIFICANT_DIGITS;
    let scale = 10u128.pow(shift);
    let mut digits = n / scale;
    if (n % scale) * 2 >= scale {
        digits += 1;
    }
    if digits == 10u128.pow(SIGNIFICANT_DIGITS) {
        digits /= 10;
        shift += 1;
    }
    (digits, shift)
}

fn shift_value(digits: u128, shift: u32) -> u128 {
    digits * 10u128.pow(shift)
}

/// Renders `digits * 10^shift / 10^unit_exp` without going through floats.
fn place_point(digits: u128, shift: u32, unit_exp: u32) -> String {
    if shift >= unit_exp {
        return shift_value(digits, shift - unit_exp).to_string();
    }
    let decimals = (unit_exp - shift) as usize;
    let text = format!("{digits:0>width$}", width = decimals + 1);
    let (int_part, frac_part) = text.split_at(text.len() - decimals);
    format!("{int_part}.{frac_part}")
}

/// `1234567` -> `1,234,567`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_labels.rs"]
mod tests;
