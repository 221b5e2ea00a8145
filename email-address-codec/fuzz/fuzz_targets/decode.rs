#![no_main]

use email_address_codec::{AddressCodec, decode::Decoder, encode::Encoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    #[cfg(feature = "debug")]
    println!("[!] Input:   {input:?}");

    match AddressCodec::new().decode(input) {
        Ok(parsed) => {
            #[cfg(feature = "debug")]
            println!("[!] Parsed:  {parsed:?}");

            // Decoded addresses always satisfy the grammar.
            assert!(email_address_codec::email_address_types::address::Address::validate(
                &parsed.full_address()
            ));

            let _output = AddressCodec::new().encode(&parsed).dump();
            #[cfg(feature = "debug")]
            println!("[!] Serialized: {_output:?}");
        }
        Err(_error) => {
            #[cfg(feature = "debug")]
            println!("[!] <invalid> {_error}");
        }
    }

    #[cfg(feature = "debug")]
    println!("{}", str::repeat("-", 120));
});
