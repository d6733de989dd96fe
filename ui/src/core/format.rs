//! Formatting helpers for presenting report figures.

pub fn format_count(value: f64) -> String {
    format!("{value:.0}")
}

pub fn format_hours(value: f64) -> String {
    format!("{value:.1} h")
}

/// Compact label for an ISO date, e.g. `2024-01-05` → `Jan 5`.
/// Unparseable input falls back to the raw string.
pub fn format_day_label(iso: &str) -> String {
    use time::macros::format_description;

    time::Date::parse(iso, &format_description!("[year]-[month]-[day]"))
        .ok()
        .and_then(|date| {
            date.format(&format_description!(
                "[month repr:short] [day padding:none]"
            ))
            .ok()
        })
        .unwrap_or_else(|| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_render_without_decimals() {
        assert_eq!(format_count(7.0), "7");
        assert_eq!(format_count(7.6), "8");
    }

    #[test]
    fn day_labels_compact_iso_dates() {
        assert_eq!(format_day_label("2024-01-05"), "Jan 5");
        assert_eq!(format_day_label("not-a-date"), "not-a-date");
    }
}
