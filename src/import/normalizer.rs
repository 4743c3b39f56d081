use chrono::NaiveDate;

/// Lowercase a header and collapse punctuation so "Sold_Date", "sold date",
/// and "Sold Date" all normalize to the same key.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a money-ish cell: "$425,000" and "425000.00" both work.
pub(crate) fn parse_money(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    cleaned.parse::<f64>().ok()
}

pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|value| value as u32))
}

pub(crate) fn parse_fractional(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok()
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Parse the date formats MLS exports actually use.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_normalize_across_separator_styles() {
        assert_eq!(normalize_header("Sold_Date"), "sold date");
        assert_eq!(normalize_header("  Sold   Date "), "sold date");
        assert_eq!(normalize_header("SOLD-DATE"), "sold date");
    }

    #[test]
    fn money_cells_tolerate_currency_formatting() {
        assert_eq!(parse_money("$425,000"), Some(425_000.0));
        assert_eq!(parse_money("425000.50"), Some(425_000.5));
        assert_eq!(parse_money("n/a"), None);
    }

    #[test]
    fn dates_parse_from_common_export_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 3).expect("valid date");
        assert_eq!(parse_date("2025-06-03"), Some(expected));
        assert_eq!(parse_date("06/03/2025"), Some(expected));
    }
}
