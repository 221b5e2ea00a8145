//! Address-related types.
//!
//! # Grammar
//!
//! ```text
//! addr-spec    = local-part "@" domain
//! local-part   = dot-atom / quoted-local
//! dot-atom     = atom *("." atom)
//! atom         = 1*<any char except "<" / ">" / "(" / ")" / "[" / "]" / "\" / "." / "," /
//!                  ";" / ":" / "@" / DQUOTE / WSP>
//! quoted-local = DQUOTE 1*<any char except line terminators> DQUOTE
//! domain       = ip-literal / hostname
//! ip-literal   = "[" 1*3DIGIT "." 1*3DIGIT "." 1*3DIGIT "." 1*3DIGIT "]"
//! hostname     = 1*(1*(ALPHA / DIGIT / "-") ".") 2*ALPHA
//! ```
//!
//! This is a practical approximation. It is looser than RFC 5322 in some places (e.g., `ip-literal`
//! does not check the range of an octet) and stricter in others (e.g., no comments, no folding).

use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatErrorKind};

/// Whitespace in the same sense as [`is_whitespace`](crate::utils::indicators::is_whitespace).
const WSP: &str = r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static ADDR_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:@"{WSP}]+"#);
    let local_part = format!(r#"(?:{atom}(?:\.{atom})*)|(?:"[^\n\r\x{{2028}}\x{{2029}}]+")"#);
    let ip_literal = r"\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]";
    let hostname = r"(?:[a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}";

    // Safety: `unwrap` can't panic because the pattern is constant and was tested.
    Regex::new(&format!(
        r"^(?:{local_part})@(?:(?:{ip_literal})|(?:{hostname}))$"
    ))
    .unwrap()
});

/// An email address, optionally carrying a display name.
///
/// The address part (`username@hostname`) is validated when the address is created through
/// [`Address::from_address`] (or `TryFrom`). [`Address::new`] trusts its caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    username: String,
    hostname: String,
    display_name: Option<String>,
}

impl Address {
    /// Create an address from already separated parts.
    ///
    /// No validation is performed.
    pub fn new<U, H>(username: U, hostname: H, display_name: Option<String>) -> Self
    where
        U: Into<String>,
        H: Into<String>,
    {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            display_name,
        }
    }

    /// Test `raw` against the address grammar.
    pub fn validate(raw: &str) -> bool {
        ADDR_SPEC.is_match(raw)
    }

    pub fn verify(raw: &str) -> Result<(), FormatError> {
        if Self::validate(raw) {
            Ok(())
        } else {
            Err(FormatError::new(FormatErrorKind::InvalidAddress))
        }
    }

    /// Create an address from a raw `username@hostname` string.
    ///
    /// The display name is taken verbatim.
    pub fn from_address(raw: &str, display_name: Option<String>) -> Result<Self, FormatError> {
        Self::verify(raw)?;

        let (username, hostname) = raw
            .split_once('@')
            .ok_or(FormatError::new(FormatErrorKind::InvalidAddress))?;

        Ok(Self::new(username, hostname, display_name))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// `username@hostname`
    pub fn full_address(&self) -> String {
        format!("{}@{}", self.username, self.hostname)
    }

    pub fn into_parts(self) -> (String, String, Option<String>) {
        (self.username, self.hostname, self.display_name)
    }
}

impl TryFrom<&str> for Address {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_address(value, None)
    }
}

impl TryFrom<String> for Address {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_address(&value, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let tests = [
            // Ok
            ("jane@example.com", true),
            ("jane.doe@example.com", true),
            ("jane+tag@mail.example.co", true),
            ("j!#$%&'*+/=?^_`{|}~@example.com", true),
            ("jäne@example.com", true),
            ("\"jane doe\"@example.com", true),
            ("\"jane@home\"@example.com", true),
            ("jane@[192.168.0.1]", true),
            ("jane@[999.999.999.999]", true),
            ("jane@sub-1.example.museum", true),
            // Failed
            ("", false),
            ("jane", false),
            ("@example.com", false),
            ("jane@", false),
            ("jane@example", false),
            ("jane@example.c", false),
            ("jane@example.c0m", false),
            ("jane@@example.com", false),
            ("jane@doe@example.com", false),
            (".jane@example.com", false),
            ("jane.@example.com", false),
            ("jane..doe@example.com", false),
            ("jane doe@example.com", false),
            ("jane\u{A0}doe@example.com", false),
            ("jane\u{FEFF}doe@example.com", false),
            ("\"\"@example.com", false),
            ("\"jane\ndoe\"@example.com", false),
            ("<jane@example.com>", false),
            ("jane@[192.168.0]", false),
            ("jane@[1234.1.1.1]", false),
            ("jane@exa_mple.com", false),
            (" jane@example.com", false),
            ("jane@example.com ", false),
        ];

        for (test, expected) in tests {
            assert_eq!(Address::validate(test), expected, "{test:?}");
            // Pure function of its input.
            assert_eq!(Address::validate(test), expected, "{test:?}");
        }
    }

    #[test]
    fn test_from_address() {
        let got = Address::from_address("jane@example.com", Some("  Jane  ".into())).unwrap();
        assert_eq!(got.username(), "jane");
        assert_eq!(got.hostname(), "example.com");
        assert_eq!(got.display_name(), Some("  Jane  "));
        assert_eq!(got.full_address(), "jane@example.com");

        let got = Address::from_address("jane@[10.0.0.1]", None).unwrap();
        assert_eq!(got.hostname(), "[10.0.0.1]");
        assert_eq!(got.display_name(), None);
    }

    #[test]
    fn test_from_address_splits_at_first_at() {
        let got = Address::from_address("\"jane@home\"@example.com", None).unwrap();
        assert_eq!(got.username(), "\"jane");
        assert_eq!(got.hostname(), "home\"@example.com");
        assert_eq!(got.full_address(), "\"jane@home\"@example.com");
    }

    #[test]
    fn test_from_address_failed() {
        let tests = ["", "not-an-address", "jane@", "<jane@example.com>"];

        for test in tests {
            let got = Address::from_address(test, None).unwrap_err();
            assert_eq!(got.kind(), FormatErrorKind::InvalidAddress, "{test:?}");
        }
    }

    #[test]
    fn test_try_from() {
        let got = Address::try_from("jane@example.com").unwrap();
        assert_eq!(got, Address::new("jane", "example.com", None));

        let got = Address::try_from(String::from("jane@example.com")).unwrap();
        assert_eq!(got, Address::new("jane", "example.com", None));

        assert!(Address::try_from("jane").is_err());
    }

    #[test]
    fn test_new_is_unchecked() {
        let got = Address::new("not an", "address", Some("Jane".into()));
        assert_eq!(got.full_address(), "not an@address");
        assert!(!Address::validate(&got.full_address()));

        let (username, hostname, display_name) = got.into_parts();
        assert_eq!(username, "not an");
        assert_eq!(hostname, "address");
        assert_eq!(display_name.as_deref(), Some("Jane"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let address = Address::new("jane", "example.com", Some("Jane Doe".into()));

        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(
            json,
            r#"{"username":"jane","hostname":"example.com","display_name":"Jane Doe"}"#
        );

        let got: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(got, address);
    }
}
