// SPDX-License-Identifier: PMPL-1.0-or-later

//! Quoted string lexing for catalog lines.

/// Parse `"<text>"` at the start of `input` and return the unescaped text.
///
/// Recognised escapes are `\"`, `\\` and `\n`. Any other escape is kept
/// verbatim, backslash included. Only whitespace may follow the closing quote.
pub fn parse_quoted(input: &str) -> Result<String, &'static str> {
    let mut chars = input.chars();
    if chars.next() != Some('"') {
        return Err("expected a quoted string");
    }

    let mut text = String::with_capacity(input.len());
    loop {
        match chars.next() {
            None => return Err("unterminated string"),
            Some('"') => break,
            Some('\\') => match chars.next() {
                Some('n') => text.push('\n'),
                Some('"') => text.push('"'),
                Some('\\') => text.push('\\'),
                Some(other) => {
                    text.push('\\');
                    text.push(other);
                }
                None => return Err("unterminated string"),
            },
            Some(c) => text.push(c),
        }
    }

    if chars.as_str().trim().is_empty() {
        Ok(text)
    } else {
        Err("unexpected text after closing quote")
    }
}
