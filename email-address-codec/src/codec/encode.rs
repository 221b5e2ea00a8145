//! # Encoding of addresses.
//!
//! An address is encoded in one of three forms:
//!
//! * `<user@host>` when the address has no display name (or the codec is [simple](AddressCodec::simple)),
//! * `"Name" <user@host>` when the display name only contains letters, digits, whitespace, `_`, `-`, and `.`,
//! * `Name <user@host>` otherwise.
//!
//! Note: The last form emits the display name verbatim. A display name containing `<`, `>`, or `"`
//! is not guaranteed to decode to the same address again.
//!
//! # Example
//!
//! ```rust
//! use email_address_codec::{AddressCodec, email_address_types::address::Address, encode::Encoder};
//!
//! let address = Address::from_address("jane@example.com", Some("Jane Doe".into())).unwrap();
//!
//! assert_eq!(
//!     AddressCodec::new().encode(&address).dump(),
//!     "\"Jane Doe\" <jane@example.com>"
//! );
//! assert_eq!(
//!     AddressCodec::simple().encode(&address).dump(),
//!     "<jane@example.com>"
//! );
//! ```

use std::fmt::{Display, Formatter, Write};

use email_address_types::{
    address::Address,
    utils::{escape_quoted, is_simple_name},
};

use crate::codec::AddressCodec;

/// Encoder.
///
/// Implemented for types that know how to encode a specific header value. See [implementors](trait.Encoder.html#implementors).
pub trait Encoder {
    type Message;

    /// Encode this message.
    ///
    /// This will return an [`Encoded`] message.
    fn encode(&self, message: &Self::Message) -> Encoded;
}

/// An encoded message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Encoded {
    data: String,
}

impl Encoded {
    /// Dump the encoded data.
    pub fn dump(self) -> String {
        self.data
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }
}

impl Display for Encoded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

impl AsRef<str> for Encoded {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl Encoder for AddressCodec {
    type Message = Address;

    fn encode(&self, message: &Self::Message) -> Encoded {
        let mut ctx = String::new();
        // Writing into a `String` can't fail.
        let _ = encode_address(message, self.simple, &mut ctx);

        Encoded { data: ctx }
    }
}

// -------------------------------------------------------------------------------------------------

fn encode_address(address: &Address, simple: bool, ctx: &mut impl Write) -> std::fmt::Result {
    match address.display_name() {
        Some(name) if !simple => {
            if is_simple_name(name) {
                write!(ctx, "\"{}\" ", escape_quoted(name))?;
            } else {
                write!(ctx, "{name} ")?;
            }
        }
        _ => {}
    }

    encode_angle_addr(address, ctx)
}

fn encode_angle_addr(address: &Address, ctx: &mut impl Write) -> std::fmt::Result {
    write!(ctx, "<{}@{}>", address.username(), address.hostname())
}
