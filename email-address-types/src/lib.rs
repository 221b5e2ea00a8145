//! # Misuse-resistant email address types
//!
//! The most prominent type in email-address-types is [`Address`](address::Address).
//! It holds the username (local-part), the hostname (domain), and an optional display name of an
//! email address as found in message header fields such as "From" or "To".
//!
//! An [`Address`](address::Address) can be created in different ways.
//! [`Address::from_address`](address::Address::from_address) (and the [`TryFrom`] implementations)
//! check the raw `username@hostname` string against the address grammar first.
//! [`Address::new`](address::Address::new) takes already separated parts and trusts the caller.
//!
//! Parsing and serialization of header text is implemented in the email-address-codec crate.
//!
//! ## Example
//!
//! ```
//! use email_address_types::{address::Address, error::FormatErrorKind};
//!
//! assert!(Address::validate("jane@example.com"));
//! assert!(!Address::validate("jane"));
//!
//! let address = Address::from_address("jane@example.com", Some("Jane Doe".into())).unwrap();
//! assert_eq!(address.username(), "jane");
//! assert_eq!(address.hostname(), "example.com");
//! assert_eq!(address.display_name(), Some("Jane Doe"));
//! assert_eq!(address.full_address(), "jane@example.com");
//!
//! let error = Address::try_from("not-an-address").unwrap_err();
//! assert_eq!(error.kind(), FormatErrorKind::InvalidAddress);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod address;
pub mod error;
pub mod utils;
