//! Barcode shape checks.
//!
//! These gate log warnings in the lookup path; they never reject input,
//! since normalization is total and the remote database is the authority on
//! whether a code exists.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));

/// Check whether a code consists solely of digits
pub fn is_numeric(code: &str) -> bool {
    DIGITS.is_match(code)
}

/// Check whether a normalized code has a plausible retail barcode shape
/// (all digits at one of the standard widths).
pub fn is_plausible_retail_code(code: &str) -> bool {
    is_numeric(code) && matches!(code.len(), 8 | 12 | 13 | 14)
}
