use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Parses the loosely formatted `order_time` the remote API hands out.
///
/// Strings carrying a zone are taken at face value. Zone-less strings are
/// read as UTC, not local time: the backend stores naive UTC timestamps.
pub fn parse_order_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(direct) = parse_direct(trimmed) {
        return Some(direct);
    }

    let canonical = if trimmed.contains('T') {
        trimmed.to_string()
    } else {
        trimmed.replacen(' ', "T", 1)
    };

    let candidate = if canonical.ends_with('Z') || has_trailing_offset(&canonical) {
        canonical
    } else {
        format!("{canonical}Z")
    };

    parse_with_offset(&candidate).map(|dt| dt.with_timezone(&Utc))
}

pub fn parse_optional_order_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_order_timestamp)
}

fn parse_direct(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = parse_with_offset(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_with_offset(value: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = match value.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => value.to_string(),
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
}

/// `+HH:MM` or `+HHMM` (either sign) at the very end.
fn has_trailing_offset(value: &str) -> bool {
    let bytes = value.as_bytes();

    let matches = |tail: &[u8]| {
        let digits_ok = |pos: &[usize]| pos.iter().all(|&i| tail[i].is_ascii_digit());
        match tail.len() {
            5 => matches!(tail[0], b'+' | b'-') && digits_ok(&[1, 2, 3, 4]),
            6 => matches!(tail[0], b'+' | b'-') && tail[3] == b':' && digits_ok(&[1, 2, 4, 5]),
            _ => false,
        }
    };

    [5usize, 6]
        .iter()
        .any(|&len| bytes.len() >= len && matches(&bytes[bytes.len() - len..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn explicit_zone_is_honoured() {
        assert_eq!(
            parse_order_timestamp("2025-03-01T09:00:00Z"),
            Some(utc(2025, 3, 1, 9, 0, 0))
        );
        assert_eq!(
            parse_order_timestamp("2025-03-01T19:30:00+10:00"),
            Some(utc(2025, 3, 1, 9, 30, 0))
        );
        assert_eq!(
            parse_order_timestamp("2025-03-01T19:30:00+1000"),
            Some(utc(2025, 3, 1, 9, 30, 0))
        );
    }

    #[test]
    fn zone_less_values_are_read_as_utc() {
        assert_eq!(
            parse_order_timestamp("2025-03-01 09:00:00"),
            Some(utc(2025, 3, 1, 9, 0, 0))
        );
        assert_eq!(
            parse_order_timestamp("2025-03-01T09:00:00.250000"),
            Some(utc(2025, 3, 1, 9, 0, 0) + chrono::Duration::milliseconds(250))
        );
        assert_eq!(
            parse_order_timestamp("  2025-03-01T09:00  "),
            Some(utc(2025, 3, 1, 9, 0, 0))
        );
    }

    #[test]
    fn bare_date_is_utc_midnight() {
        assert_eq!(
            parse_order_timestamp("2025-03-01"),
            Some(utc(2025, 3, 1, 0, 0, 0))
        );
    }

    #[test]
    fn rfc2822_is_accepted() {
        assert_eq!(
            parse_order_timestamp("Sat, 01 Mar 2025 09:00:00 +0000"),
            Some(utc(2025, 3, 1, 9, 0, 0))
        );
    }

    #[test]
    fn garbage_and_blank_fail() {
        assert_eq!(parse_order_timestamp(""), None);
        assert_eq!(parse_order_timestamp("   "), None);
        assert_eq!(parse_order_timestamp("not-a-date"), None);
        assert_eq!(parse_order_timestamp("2025-13-45 99:00:00"), None);
        assert_eq!(parse_optional_order_timestamp(None), None);
    }

    #[test]
    fn trailing_offset_detection() {
        assert!(has_trailing_offset("2025-03-01T09:00:00+10:00"));
        assert!(has_trailing_offset("2025-03-01T09:00:00-0530"));
        assert!(!has_trailing_offset("2025-03-01T09:00:00"));
        assert!(!has_trailing_offset("+1:00"));
    }
}
