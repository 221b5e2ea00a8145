#![no_main]

use email_address_codec::{
    AddressCodec, decode::Decoder, email_address_types::utils::is_simple_name, encode::Encoder,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let Ok(parsed1) = AddressCodec::new().decode(input) else {
        return;
    };

    // Unquoted names and quoted local-parts are not guaranteed to survive a round trip.
    if parsed1.full_address().contains('"') {
        return;
    }

    if !parsed1.display_name().is_none_or(is_simple_name) {
        return;
    }

    #[cfg(feature = "debug")]
    println!("[!] Parsed1: {parsed1:?}");

    let output = AddressCodec::new().encode(&parsed1).dump();
    #[cfg(feature = "debug")]
    println!("[!] Serialized: {output:?}");

    let parsed2 = AddressCodec::new().decode(&output).unwrap();
    #[cfg(feature = "debug")]
    println!("[!] Parsed2: {parsed2:?}");

    #[cfg(not(feature = "quirk_collapse_first_whitespace_only"))]
    assert_eq!(parsed1, parsed2);
    #[cfg(feature = "quirk_collapse_first_whitespace_only")]
    assert_eq!(parsed1.full_address(), parsed2.full_address());
});
