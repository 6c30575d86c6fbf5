//! Lenient text parsing used when reading form fields.
//!
//! Both helpers return `None` for blank or non-numeric text instead of failing.

/// Parses trimmed text as an `i32`.
pub fn try_parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Parses trimmed text as a finite `f64`.
pub fn try_parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
