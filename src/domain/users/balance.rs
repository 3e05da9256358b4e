/// Stored balance applied when a create request omits the field.
pub const DEFAULT_BALANCE: &str = "0.00000";

/// Display form of a stored balance: the text parsed as a float and cut
/// to two fractional digits by flooring (`"123.456"` -> `123.45`,
/// `"999.999"` -> `999.99`), never rounded half-up. Empty, unparseable,
/// or non-finite input collapses to `0.0`; the function always returns a
/// finite number.
pub fn display_balance(stored: &str) -> f64 {
    let parsed = match stored.parse::<f64>() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    let truncated = (parsed * 100.0).floor() / 100.0;
    if truncated.is_finite() { truncated } else { 0.0 }
}
