use chrono::NaiveDate;

/// Parses the `YYYYMMDD` integer encoding used for claim and death dates.
///
/// Integer values that went through a float column (`"20080103.0"`) are accepted.
/// Returns `None` for anything that is not eight digits forming a valid date.
pub fn parse_yyyymmdd(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let digits = match trimmed.split_once('.') {
        Some((integer, fraction)) if fraction.chars().all(|c| c == '0') => integer,
        Some(_) => return None,
        None => trimmed,
    };

    if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}
