use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(separator);
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Sign and whole-unit magnitude of an amount. Magnitudes beyond `u64`
/// saturate and NaN reads as zero.
fn split_amount(amount: f64) -> (&'static str, u64) {
    let rounded = amount.round();
    let magnitude = rounded.abs() as u64;
    let sign = if rounded < 0.0 && magnitude > 0 { "-" } else { "" };
    (sign, magnitude)
}

/// Rupiah with no fraction digits: `Rp 1.250.000`, `-Rp 5.000`.
pub fn format_idr(amount: f64) -> String {
    let (sign, magnitude) = split_amount(amount);
    format!("{}Rp {}", sign, group_digits(magnitude, '.'))
}

/// Same grouping as [`format_idr`] without the currency prefix, for axis ticks.
pub fn format_idr_plain(amount: f64) -> String {
    let (sign, magnitude) = split_amount(amount);
    format!("{}{}", sign, group_digits(magnitude, '.'))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// Calendar day of a backend date. Timestamps are converted to UTC first, so
/// `2024-03-01T23:30:00-02:00` lands on March 2nd.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

pub fn format_display_date(raw: &str) -> String {
    match parse_day(raw) {
        Some(day) => day.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idr_groups_thousands_with_dots() {
        assert_eq!(format_idr(0.0), "Rp 0");
        assert_eq!(format_idr(950.0), "Rp 950");
        assert_eq!(format_idr(1_000.0), "Rp 1.000");
        assert_eq!(format_idr(1_250_000.0), "Rp 1.250.000");
    }

    #[test]
    fn idr_negative_and_rounding() {
        assert_eq!(format_idr(-5_000.0), "-Rp 5.000");
        assert_eq!(format_idr(1_999.6), "Rp 2.000");
        assert_eq!(format_idr(-0.4), "Rp 0");
    }

    #[test]
    fn huge_amounts_do_not_overflow() {
        assert_eq!(format_idr(-1e19), "-Rp 10.000.000.000.000.000.000");
        assert_eq!(format_idr(1e30), "Rp 18.446.744.073.709.551.615");
        assert_eq!(format_idr(f64::NEG_INFINITY), "-Rp 18.446.744.073.709.551.615");
        assert_eq!(format_idr(f64::NAN), "Rp 0");
    }

    #[test]
    fn plain_ticks_have_no_prefix() {
        assert_eq!(format_idr_plain(2_500_000.0), "2.500.000");
        assert_eq!(format_idr_plain(-12_000.0), "-12.000");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(42.857), "42.9");
        assert_eq!(format_percent(100.0), "100.0");
    }

    #[test]
    fn parse_day_accepts_backend_shapes() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(parse_day("2024-03-01"), Some(day));
        assert_eq!(parse_day("2024-03-01T00:00:00.000Z"), Some(day));
        assert_eq!(parse_day("2024-03-01T10:15:00"), Some(day));
        assert_eq!(
            parse_day("2024-03-01T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        assert_eq!(parse_day("yesterday"), None);
    }

    #[test]
    fn display_date_falls_back_to_raw() {
        assert_eq!(format_display_date("2024-01-05T00:00:00.000Z"), "05/01/2024");
        assert_eq!(format_display_date("n/a"), "n/a");
    }
}
