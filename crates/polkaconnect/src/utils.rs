//! Amount codec and address display helpers.
//!
//! The codec works in `f64`, so it is exact only while the scaled value fits
//! in 53 bits of mantissa. Converting raw → human → raw is lossy and is not
//! an inverse.

use polkaconnect_error::{PolkaConnectError, Result};
use serde_json::Value;

/// Decimal places of the relay-chain native token
pub const DEFAULT_DECIMALS: u32 = 10;

/// Characters kept at the front by [`format_address`]
pub const DEFAULT_PREFIX_LEN: usize = 6;

/// Characters kept at the end by [`format_address`]
pub const DEFAULT_SUFFIX_LEN: usize = 4;

// ============================================================================
// Human Amounts
// ============================================================================

/// A value that can be read as a human-denominated amount
pub trait HumanAmount {
    /// Coerces the value to `f64`
    fn to_f64(&self) -> Result<f64>;
}

impl HumanAmount for str {
    fn to_f64(&self) -> Result<f64> {
        let trimmed = self.trim();
        trimmed
            .parse::<f64>()
            .map_err(|_| PolkaConnectError::InvalidAmount(format!("'{}' is not a number", trimmed)))
    }
}

impl HumanAmount for String {
    fn to_f64(&self) -> Result<f64> {
        self.as_str().to_f64()
    }
}

impl HumanAmount for f64 {
    fn to_f64(&self) -> Result<f64> {
        Ok(*self)
    }
}

impl HumanAmount for f32 {
    fn to_f64(&self) -> Result<f64> {
        Ok(f64::from(*self))
    }
}

impl<T: HumanAmount + ?Sized> HumanAmount for &T {
    fn to_f64(&self) -> Result<f64> {
        (**self).to_f64()
    }
}

macro_rules! impl_human_amount_for_int {
    ($($ty:ty),*) => {
        $(
            impl HumanAmount for $ty {
                fn to_f64(&self) -> Result<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_human_amount_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

fn finite(amount: &impl HumanAmount) -> Result<f64> {
    let value = amount.to_f64()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PolkaConnectError::InvalidAmount(format!("{} is not finite", value)))
    }
}

fn scale(decimals: u32) -> f64 {
    10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX))
}

// ============================================================================
// Amount Codec
// ============================================================================

/// Converts a human amount into the chain's smallest unit.
///
/// Computes `floor(human × 10^decimals)` and renders it as a decimal integer.
///
/// ```
/// use polkaconnect::utils::parse_amount;
///
/// assert_eq!(parse_amount("1.5", 10).unwrap(), "15000000000");
/// assert_eq!(parse_amount(2u32, 3).unwrap(), "2000");
/// ```
pub fn parse_amount(human: impl HumanAmount, decimals: u32) -> Result<String> {
    let raw = (finite(&human)? * scale(decimals)).floor();
    if !raw.is_finite() {
        return Err(PolkaConnectError::InvalidAmount(format!(
            "amount overflows at {} decimals",
            decimals
        )));
    }
    // `+ 0.0` folds -0 into 0
    Ok(format!("{:.0}", raw + 0.0))
}

/// Converts a smallest-unit amount into a human amount with 4 fractional digits.
///
/// ```
/// use polkaconnect::utils::format_balance;
///
/// assert_eq!(format_balance("15000000000", 10).unwrap(), "1.5000");
/// ```
pub fn format_balance(raw: impl HumanAmount, decimals: u32) -> Result<String> {
    let human = finite(&raw)? / scale(decimals);
    Ok(format!("{:.4}", human + 0.0))
}

/// [`parse_amount`] at [`DEFAULT_DECIMALS`]
pub fn parse_amount_default(human: impl HumanAmount) -> Result<String> {
    parse_amount(human, DEFAULT_DECIMALS)
}

/// [`format_balance`] at [`DEFAULT_DECIMALS`]
pub fn format_balance_default(raw: impl HumanAmount) -> Result<String> {
    format_balance(raw, DEFAULT_DECIMALS)
}

// ============================================================================
// Address Display
// ============================================================================

/// Shortens an address to `prefix...suffix` for display.
///
/// Addresses no longer than `prefix_len + suffix_len` characters come back
/// unchanged. Lengths count `char`s, not bytes.
pub fn format_address_with(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let len = address.chars().count();
    if len <= prefix_len.saturating_add(suffix_len) {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(len - suffix_len).collect();
    format!("{}...{}", prefix, suffix)
}

/// Shortens an address keeping 6 leading and 4 trailing characters
pub fn format_address(address: &str) -> String {
    format_address_with(address, DEFAULT_PREFIX_LEN, DEFAULT_SUFFIX_LEN)
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// Extracts the `data` array of a `{success, data, cached}` envelope.
///
/// An absent or `null` field yields an empty list; any other non-array value
/// is a decode error.
pub fn data_field(response: &Value) -> Result<Vec<Value>> {
    match response.get("data") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(PolkaConnectError::Decode(format!(
            "expected `data` to be an array, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ============================================================================
    // Amount Codec Tests
    // ============================================================================

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5", 10).unwrap(), "15000000000");
        assert_eq!(parse_amount(1.5, 10).unwrap(), "15000000000");
        assert_eq!(parse_amount("0", 10).unwrap(), "0");
        assert_eq!(parse_amount("  2.25 ", 2).unwrap(), "225");
        assert_eq!(parse_amount(7u64, 0).unwrap(), "7");
        assert_eq!(parse_amount(String::from("1e3"), 18).unwrap(), "1000000000000000000000");
    }

    #[test]
    fn test_parse_amount_floors() {
        assert_eq!(parse_amount("1.239", 2).unwrap(), "123");
        assert_eq!(parse_amount("-1.5", 0).unwrap(), "-2");
        assert_eq!(parse_amount("-0", 10).unwrap(), "0");
    }

    #[test]
    fn test_parse_amount_invalid() {
        for input in ["", "abc", "1,5", "1.2.3"] {
            let err = parse_amount(input, 10).unwrap_err();
            assert!(matches!(err, PolkaConnectError::InvalidAmount(_)), "{input}");
        }
        let err = parse_amount("  1,5 ", 10).unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount: '1,5' is not a number");

        assert!(parse_amount("NaN", 10).is_err());
        assert!(parse_amount(f64::INFINITY, 10).is_err());
        assert!(parse_amount(1e300, 8).is_ok());
        assert!(parse_amount(1e300, 300).is_err());
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance("15000000000", 10).unwrap(), "1.5000");
        assert_eq!(format_balance(0u8, 10).unwrap(), "0.0000");
        assert_eq!(format_balance("1", 0).unwrap(), "1.0000");
        assert_eq!(format_balance(1_234_567u64, 6).unwrap(), "1.2346");
        assert!(format_balance("twelve", 10).is_err());
    }

    #[test]
    fn test_default_decimals() {
        assert_eq!(parse_amount_default("1.5").unwrap(), "15000000000");
        assert_eq!(format_balance_default("15000000000").unwrap(), "1.5000");
    }

    // ============================================================================
    // Address Display Tests
    // ============================================================================

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("15oF4uVJwmo4TdGW7VfQxNLavjCXviqxT9S1MgbjMNHr6Sp5"),
            "15oF4u...6Sp5"
        );
        assert_eq!(format_address("0123456789"), "0123456789");
        assert_eq!(format_address("0123456789a"), "012345...789a");
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_address_with() {
        assert_eq!(format_address_with("abcdefgh", 2, 2), "ab...gh");
        assert_eq!(format_address_with("abcdefgh", 3, 0), "abc...");
        assert_eq!(format_address_with("abcdefgh", 0, 0), "...");
        assert_eq!(format_address_with("abcd", usize::MAX, 1), "abcd");
    }

    #[test]
    fn test_format_address_multibyte() {
        assert_eq!(format_address_with("ααββγγδδ", 2, 2), "αα...δδ");
    }

    // ============================================================================
    // Envelope Tests
    // ============================================================================

    #[test]
    fn test_data_field() {
        assert_eq!(data_field(&json!({"data": [1, 2]})).unwrap(), vec![json!(1), json!(2)]);
        assert!(data_field(&json!({})).unwrap().is_empty());
        assert!(data_field(&json!({"data": null})).unwrap().is_empty());
        assert!(data_field(&json!([1, 2])).unwrap().is_empty());

        let err = data_field(&json!({"data": {"id": 1}})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }
}
