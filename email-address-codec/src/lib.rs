//! # Email Address Header Library
//!
//! email-address-codec provides parsing and construction of email addresses as found in message
//! header fields such as "From" or "To".
//! It is based on [email_address_types] and extends it with decoding and encoding support.
//!
//! ## Example
//!
//! ```rust
//! use email_address_codec::{AddressCodec, decode::Decoder, encode::Encoder};
//!
//! // We assume here that the header field was already split into single addresses.
//! let input = "Jane Doe <jane@example.com>";
//!
//! let parsed = AddressCodec::new().decode(input).unwrap();
//! println!("// Parsed:");
//! println!("{parsed:#?}");
//!
//! let serialized = AddressCodec::new().encode(&parsed).dump();
//! println!("// Serialized:");
//! println!("// {serialized}");
//! ```
//!
//! ## Decoding
//!
//! Decoding is implemented through the [`Decoder`](crate::decode::Decoder) trait.
//! A token may start with a quoted display name (`"Jane Doe" <jane@example.com>`), an unquoted
//! display name (`Jane Doe <jane@example.com>`), or no display name at all (`<jane@example.com>`).
//! The address in angle brackets is mandatory and must match the address grammar, see
//! [`Address::validate`](email_address_types::address::Address::validate).
//!
//! ## Encoding
//!
//! The [`Encoder::encode(...)`](crate::encode::Encoder::encode) method will return an instance of
//! [`Encoded`](crate::encode::Encoded). Use [`AddressCodec::simple()`] to drop display names.
//!
//! # Features
//!
//! |Feature                             |Description                                        |Enabled by default|
//! |------------------------------------|---------------------------------------------------|------------------|
//! |quirk_collapse_first_whitespace_only|Collapse only the first run of whitespace          |No                |
//! |quirk_verbatim_quoted_name          |Keep `\"` in quoted display names as it is         |No                |
//! |serde                               |`Serialize`/`Deserialize` for `Address`            |No                |
//! |fuzz                                |Expose internal scanner functions for fuzzing      |No                |

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Test examples from repository root README.
#[doc = include_str!("../../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctestsRoot;

mod codec;
mod header;
#[cfg(test)]
mod testing;

#[cfg(feature = "fuzz")]
pub mod fuzz {
    pub use crate::header::{normalize, quoted_name};
}

pub use codec::*;
// Re-export.
pub use email_address_types;
