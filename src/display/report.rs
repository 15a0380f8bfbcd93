//! Terminal formatting helpers shared by the plan view and the reports

use crate::models::Money;

/// Percentage with one decimal below 10%, whole numbers above
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Bar showing `part` as a share of `whole`
///
/// Empty when `whole` is zero or `part` is not positive.
pub fn format_bar(part: Money, whole: Money, width: usize) -> String {
    let filled = match part.ratio(whole) {
        Some(r) if r > 0.0 => ((r * width as f64).round() as usize).min(width),
        _ => 0,
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Section title underlined with a double rule
pub fn format_header(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, "═".repeat(width))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Shorten to `max_len` characters, ending in "..." when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.extend(".".repeat(max_len - keep).chars());
    out
}
