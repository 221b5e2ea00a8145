#![no_main]

use email_address_codec::fuzz::{normalize, quoted_name};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let normalized = normalize(input);

    if let Ok(Some((remaining, _name))) = quoted_name(&normalized) {
        #[cfg(feature = "debug")]
        println!("[!] Name: {_name:?}, Remaining: {remaining:?}");

        assert!(normalized.ends_with(remaining));
    }
});
