#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use polkaconnect::utils::format_address_with;

#[derive(Debug, Arbitrary)]
struct AddressInput {
    address: String,
    prefix_len: u8,
    suffix_len: u8,
}

fuzz_target!(|input: AddressInput| {
    let prefix = usize::from(input.prefix_len);
    let suffix = usize::from(input.suffix_len);
    let len = input.address.chars().count();

    let shortened = format_address_with(&input.address, prefix, suffix);

    if len <= prefix + suffix {
        assert_eq!(shortened, input.address);
    } else {
        assert_eq!(shortened.chars().count(), prefix + suffix + 3);
        assert!(input.address.starts_with(shortened.split("...").next().unwrap_or_default()));
        assert!(shortened.ends_with(&input.address.chars().skip(len - suffix).collect::<String>()));
    }
});
