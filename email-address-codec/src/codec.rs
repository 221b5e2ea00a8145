pub mod decode;
pub mod encode;

/// Codec for email addresses in message header fields.
///
/// Decoding accepts the bare form (`<user@host>`) as well as both named forms (`"Name" <user@host>`
/// and `Name <user@host>`). Encoding produces the named forms when the address carries a display
/// name, unless the codec was configured to always produce the bare form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
// We use `#[non_exhaustive]` to prevent users from using struct literal syntax.
//
// This allows to add configuration options later.
#[non_exhaustive]
pub struct AddressCodec {
    simple: bool,
}

impl AddressCodec {
    /// Create codec with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create codec that always encodes the bare form, i.e., drops the display name.
    pub fn simple() -> Self {
        Self { simple: true }
    }

    pub fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    pub fn is_simple(&self) -> bool {
        self.simple
    }
}
