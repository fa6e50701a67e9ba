//! Date/time display formatting.
//!
//! Event times arrive as ISO 8601 strings and are shown dd/MM/yyyy, the
//! format the audience expects.

/// "2026-09-01T19:30:00Z" -> "01/09/2026 19:30"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some(date) = reorder_date(date_part) {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, hhmm);
        }
    }
    datetime_str.to_string()
}

/// "2026-09-01" or "2026-09-01T19:30:00Z" -> "01/09/2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    reorder_date(date_part).unwrap_or_else(|| date_str.to_string())
}

fn reorder_date(date_part: &str) -> Option<String> {
    let (year, rest) = date_part.split_once('-')?;
    let (month, day) = rest.split_once('-')?;
    if year.len() != 4 || month.is_empty() || day.is_empty() {
        return None;
    }
    Some(format!("{}/{}/{}", day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2026-09-01T19:30:00Z"), "01/09/2026 19:30");
        assert_eq!(
            format_datetime("2026-12-31T23:59:59.123Z"),
            "31/12/2026 23:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-09-01"), "01/09/2026");
        assert_eq!(format_date("2026-09-01T19:30:00Z"), "01/09/2026");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime("tonight"), "tonight");
        assert_eq!(format_date("tonight"), "tonight");
    }
}
