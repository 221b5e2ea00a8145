use email_address_types::address::Address;

use crate::codec::{AddressCodec, decode::Decoder, encode::Encoder};

pub(crate) fn known_answer_test_encode(
    (codec, test_object, expected): (AddressCodec, Address, impl AsRef<str>),
) {
    let expected = expected.as_ref();
    let got = codec.encode(&test_object).dump();

    if expected != got {
        println!("# Debug (`escape_debug`, encapsulated by `<<<` and `>>>`)");
        println!(
            "Left:  <<<{}>>>\nRight: <<<{}>>>",
            expected.escape_debug(),
            got.escape_debug(),
        );
        println!("# Debug");
        panic!("Left:  {:?}\nRight: {:?}", expected, got);
    }
}

pub(crate) fn kat_inverse_address(tests: &[(&str, Address)]) {
    for (no, (test_input, expected_object)) in tests.iter().enumerate() {
        println!("# {no}");

        let got_object = AddressCodec::new().decode(test_input).unwrap();
        assert_eq!(*expected_object, got_object);

        let got_output = AddressCodec::new().encode(&got_object).dump();

        let got_object_again = AddressCodec::new().decode(&got_output).unwrap();
        assert_eq!(got_object, got_object_again);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn test_known_answer_test_encode() {
        known_answer_test_encode((
            AddressCodec::new(),
            Address::new("jane", "example.com", None),
            "",
        ));
    }
}
