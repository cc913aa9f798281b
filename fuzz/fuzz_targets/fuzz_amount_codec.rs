#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polkaconnect::utils::{format_balance, parse_amount};

#[derive(Debug, Arbitrary)]
struct CodecInput {
    text: String,
    value: f64,
    raw: u128,
    decimals: u32,
}

fuzz_target!(|input: CodecInput| {
    // Arbitrary text and decimals must error, never panic
    let _ = parse_amount(input.text.as_str(), input.decimals);
    let _ = format_balance(input.text.as_str(), input.decimals);

    // Non-finite values are always rejected
    let parsed = parse_amount(input.value, input.decimals);
    if !input.value.is_finite() {
        assert!(parsed.is_err(), "non-finite amount accepted: {}", input.value);
    }

    // A successful parse is a decimal integer
    if let Ok(raw) = parsed {
        let digits = raw.strip_prefix('-').unwrap_or(&raw);
        assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()), "bad output: {}", raw);
    }

    // Formatting always yields exactly four fractional digits
    if let Ok(human) = format_balance(input.raw, input.decimals) {
        let fraction = human.rsplit_once('.').map(|(_, f)| f.len());
        assert_eq!(fraction, Some(4), "bad output: {}", human);
    }
});
