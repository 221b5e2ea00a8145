use std::borrow::Cow;

pub mod indicators {
    /// Whitespace as understood by the address grammar and the header scanner.
    ///
    /// ```text
    /// WSP = %x09-0D / %x20 / %xA0 / %x1680 / %x2000-200A / %x2028-2029 / %x202F / %x205F /
    ///       %x3000 / %xFEFF
    /// ```
    pub fn is_whitespace(c: char) -> bool {
        matches!(
            c,
            '\t' | '\n'
                | '\x0B'
                | '\x0C'
                | '\r'
                | ' '
                | '\u{A0}'
                | '\u{1680}'
                | '\u{2000}'..='\u{200A}'
                | '\u{2028}'
                | '\u{2029}'
                | '\u{202F}'
                | '\u{205F}'
                | '\u{3000}'
                | '\u{FEFF}'
        )
    }

    /// `simple-name-char = ALPHA / DIGIT / %x09-0D / SP / "_" / "-" / "."`
    pub fn is_simple_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ' | '_' | '-' | '.'
            )
    }
}

use indicators::{is_simple_name_char, is_whitespace};

/// `simple-name = 1*simple-name-char`
///
/// Display names of this form are quoted when encoded.
pub fn is_simple_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_simple_name_char)
}

pub fn escape_quoted(unescaped: &str) -> Cow<'_, str> {
    let mut escaped = Cow::Borrowed(unescaped);

    if escaped.contains('\\') {
        escaped = Cow::Owned(escaped.replace('\\', "\\\\"));
    }

    if escaped.contains('\"') {
        escaped = Cow::Owned(escaped.replace('"', "\\\""));
    }

    escaped
}

/// Turn every `\"` into `"`.
///
/// Other backslashes are kept as they are. The header scanner only knows about escaped quotes.
pub fn unescape_quoted(escaped: &str) -> Cow<'_, str> {
    if escaped.contains("\\\"") {
        Cow::Owned(escaped.replace("\\\"", "\""))
    } else {
        Cow::Borrowed(escaped)
    }
}

/// Replace every run of whitespace with a single space.
pub fn collapse_whitespace(input: &str) -> Cow<'_, str> {
    let mut collapsed = String::with_capacity(input.len());
    let mut in_run = false;

    for c in input.chars() {
        if is_whitespace(c) {
            if !in_run {
                collapsed.push(' ');
                in_run = true;
            }
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }

    if collapsed == input {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(collapsed)
    }
}

/// Replace the first run of whitespace with a single space and leave all other runs untouched.
pub fn collapse_first_whitespace(input: &str) -> Cow<'_, str> {
    let Some(start) = input.find(is_whitespace) else {
        return Cow::Borrowed(input);
    };

    let end = input[start..]
        .find(|c| !is_whitespace(c))
        .map_or(input.len(), |offset| start + offset);

    if &input[start..end] == " " {
        return Cow::Borrowed(input);
    }

    Cow::Owned(format!("{} {}", &input[..start], &input[end..]))
}
