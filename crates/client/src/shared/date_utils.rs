/// Utilities for date parsing and formatting
///
/// Spreadsheets carry dates as ISO strings, US `MM/DD/YYYY`, two-digit
/// years or Excel serial numbers; the API wants `YYYY-MM-DD`.
use chrono::{Duration, NaiveDate};

/// Normalize a spreadsheet date cell to `YYYY-MM-DD`.
/// Returns `None` when the value is not a recognizable date.
pub fn normalize_date(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    // ISO date or datetime
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    if let Ok(d) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(d.format("%Y-%m-%d").to_string());
    }

    // chrono's %Y happily reads "26" as year 0026, so pick formats by year width
    let year_len = date_part.rsplit(['/', '-']).next().map(str::len).unwrap_or(0);
    let formats: &[&str] = if year_len == 2 {
        &["%m/%d/%y", "%m-%d-%y"]
    } else {
        &["%m/%d/%Y", "%m-%d-%Y"]
    };
    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, fmt) {
            return Some(d.format("%Y-%m-%d").to_string());
        }
    }

    // Excel serial day number (days since 1899-12-30)
    if let Ok(serial) = value.parse::<f64>() {
        if (1.0..=2_958_465.0).contains(&serial) {
            return excel_serial_to_date(serial).map(|d| d.format("%Y-%m-%d").to_string());
        }
    }

    None
}

/// Convert an Excel serial date to a calendar date
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Format ISO date string to MM/DD/YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "03/15/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", month, day, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2026-05-01"), Some("2026-05-01".into()));
        assert_eq!(normalize_date("2026-05-01T10:00:00Z"), Some("2026-05-01".into()));
        assert_eq!(normalize_date("5/1/2026"), Some("2026-05-01".into()));
        assert_eq!(normalize_date("05/01/26"), Some("2026-05-01".into()));
        assert_eq!(normalize_date("46143"), Some("2026-05-01".into()));
        assert_eq!(normalize_date("next spring"), None);
        assert_eq!(normalize_date("  "), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "03/15/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "03/15/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
