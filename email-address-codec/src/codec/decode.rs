//! # Decoding of addresses.
//!
//! # Example
//!
//! ```rust
//! use email_address_codec::{AddressCodec, decode::Decoder};
//!
//! let address = AddressCodec::new()
//!     .decode("\"Jane Doe\" <jane@example.com>")
//!     .unwrap();
//!
//! assert_eq!(address.display_name(), Some("Jane Doe"));
//! assert_eq!(address.full_address(), "jane@example.com");
//! ```

use email_address_types::{address::Address, error::FormatError};

use crate::{codec::AddressCodec, header::header_address};

/// Decoder.
///
/// Implemented for types that know how to decode a specific header value. See [implementors](trait.Decoder.html#implementors).
pub trait Decoder {
    type Message;
    type Error;

    /// Decode a single header token.
    fn decode(&self, input: &str) -> Result<Self::Message, Self::Error>;
}

impl Decoder for AddressCodec {
    type Message = Address;
    type Error = FormatError;

    fn decode(&self, input: &str) -> Result<Self::Message, Self::Error> {
        header_address(input)
    }
}
