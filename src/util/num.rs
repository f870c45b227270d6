/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Parameters
/// - `value`: The unsigned integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use quotient::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(42, "too big!"), Ok(42.0));
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Parses a run of ASCII digits into an integer that an `f64` holds exactly.
///
/// Returns `None` for empty or non-digit input and for values above
/// `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use quotient::util::num::parse_safe_integer;
///
/// assert_eq!(parse_safe_integer("007"), Some(7));
/// assert_eq!(parse_safe_integer("99999999999999999999"), None);
/// ```
#[must_use]
pub fn parse_safe_integer(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u64 = digits.parse().ok()?;
    u64_to_f64_checked(value, ()).ok().map(|_| value)
}
