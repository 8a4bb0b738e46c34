//! Release date rendering.

/// Render a `YYYYMMDD` release date as `YYYY-MM-DD`.
///
/// Anything whose decimal form is not exactly 8 characters (zero, missing,
/// or malformed dates) is returned as the plain decimal string.
pub fn normalize_release_date(raw: i64) -> String {
    let digits = raw.to_string();
    if digits.len() == 8 {
        format!("{}-{}-{}", &digits[0..4], &digits[4..6], &digits[6..8])
    } else {
        digits
    }
}
