//! Scanner for a single address token of a header field.
//!
//! ```text
//! token        = [quoted-name / phrase] angle-addr *ANY
//! quoted-name  = DQUOTE *(<any char except DQUOTE> / "\" DQUOTE) DQUOTE
//! phrase       = *<any char except "<">
//! angle-addr   = "<" addr-spec ">"
//! ```
//!
//! The token is normalized first, i.e., whitespace is collapsed and the token is trimmed.
//! A quoted name may appear anywhere in front of the address. Text in front of a quoted name, and
//! text between a quoted name and the address, is discarded.

use std::borrow::Cow;

#[cfg(feature = "quirk_collapse_first_whitespace_only")]
use email_address_types::utils::collapse_first_whitespace;
#[cfg(not(feature = "quirk_collapse_first_whitespace_only"))]
use email_address_types::utils::collapse_whitespace;
#[cfg(not(feature = "quirk_verbatim_quoted_name"))]
use email_address_types::utils::unescape_quoted;
use email_address_types::{
    address::Address,
    error::{FormatError, FormatErrorKind},
    utils::indicators::is_whitespace,
};
use nom::{
    IResult,
    bytes::complete::{tag, take_until},
    sequence::delimited,
};

pub(crate) fn header_address(input: &str) -> Result<Address, FormatError> {
    let normalized = normalize(input);

    let (remaining, mut display_name) = match quoted_name(&normalized)? {
        Some((remaining, name)) => (remaining, Some(name)),
        None => (&*normalized, None),
    };

    let (remaining, prefix) =
        phrase(remaining).map_err(|_| FormatErrorKind::MissingOpeningBracket)?;

    if !prefix.is_empty() {
        match display_name {
            None => display_name = Some(prefix.trim_matches(is_whitespace).to_owned()),
            Some(_) => log::warn!("Discarded {prefix:?} in front of address (name already set)"),
        }
    }

    let (trailing, addr_spec) =
        angle_addr(remaining).map_err(|_| FormatErrorKind::MissingClosingBracket)?;

    if !trailing.is_empty() {
        log::debug!("Ignored {trailing:?} after address");
    }

    log::trace!("Scanned addr-spec {addr_spec:?} with display name {display_name:?}");

    Address::from_address(addr_spec, display_name)
}

/// Collapse whitespace and trim.
pub fn normalize(input: &str) -> Cow<'_, str> {
    #[cfg(not(feature = "quirk_collapse_first_whitespace_only"))]
    let collapsed = collapse_whitespace(input);
    #[cfg(feature = "quirk_collapse_first_whitespace_only")]
    let collapsed = collapse_first_whitespace(input);

    match collapsed {
        Cow::Borrowed(collapsed) => Cow::Borrowed(collapsed.trim_matches(is_whitespace)),
        Cow::Owned(collapsed) => Cow::Owned(collapsed.trim_matches(is_whitespace).to_owned()),
    }
}

/// Find the first quoted name.
///
/// Returns `Ok(None)` when `input` contains no `"`. Otherwise, returns the (trimmed) remainder
/// after the closing quote and the name. A `"` directly preceded by `\` does not close the name,
/// with the exception of the first character after the opening quote.
pub fn quoted_name(input: &str) -> Result<Option<(&str, String)>, FormatError> {
    let Some(opening) = input.find('"') else {
        return Ok(None);
    };

    let skipped = input[..opening].trim_matches(is_whitespace);
    if !skipped.is_empty() {
        log::warn!("Discarded {skipped:?} in front of quoted name");
    }

    let start = opening + 1;
    let mut previous = None;
    let mut closing = None;

    for (index, c) in input[start..].char_indices() {
        if c == '"' && previous != Some('\\') {
            closing = Some(start + index);
            break;
        }

        previous = Some(c);
    }

    let closing = closing.ok_or(FormatError::new(FormatErrorKind::MissingClosingQuote))?;

    #[cfg(not(feature = "quirk_verbatim_quoted_name"))]
    let name = unescape_quoted(&input[start..closing]).into_owned();
    #[cfg(feature = "quirk_verbatim_quoted_name")]
    let name = input[start..closing].to_owned();

    let remaining = input[closing + 1..].trim_matches(is_whitespace);

    Ok(Some((remaining, name)))
}

/// `phrase = *<any char except "<">`
fn phrase(input: &str) -> IResult<&str, &str> {
    take_until("<")(input)
}

/// `angle-addr = "<" *<any char except ">"> ">"`
///
/// Note: The content is checked against the address grammar later.
fn angle_addr(input: &str) -> IResult<&str, &str> {
    delimited(tag("<"), take_until(">"), tag(">"))(input)
}
