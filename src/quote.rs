// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Renders a string as a quoted single-line literal.
///
/// Single quotes are used, unless the string contains a single quote
/// and no double quotes. Backslashes, the chosen quote and non-printable
/// characters are escaped, so the result never contains a line break.
///
/// ```
/// use svgtext::quote;
///
/// assert_eq!(quote("Hello"), "'Hello'");
/// assert_eq!(quote("it's"), "\"it's\"");
/// assert_eq!(quote("a\nb"), "'a\\nb'");
/// ```
pub fn quote(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };

    let mut s = String::with_capacity(text.len() + 2);
    s.push(quote);
    for c in text.chars() {
        match c {
            '\\' => s.push_str("\\\\"),
            '\n' => s.push_str("\\n"),
            '\r' => s.push_str("\\r"),
            '\t' => s.push_str("\\t"),
            _ if c == quote => {
                s.push('\\');
                s.push(c);
            }
            _ if is_printable(c) => s.push(c),
            _ => {
                let code = c as u32;
                if code < 0x100 {
                    s.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x10000 {
                    s.push_str(&format!("\\u{:04x}", code));
                } else {
                    s.push_str(&format!("\\U{:08x}", code));
                }
            }
        }
    }
    s.push(quote);

    s
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }

    if c.is_control() || c.is_whitespace() {
        return false;
    }

    !is_format(c) && !is_private_use(c)
}

// Unicode 'Cf' category.
fn is_format(c: char) -> bool {
    match c as u32 {
        0x00AD
        | 0x0600..=0x0605
        | 0x061C
        | 0x06DD
        | 0x070F
        | 0x0890..=0x0891
        | 0x08E2
        | 0x180E
        | 0x200B..=0x200F
        | 0x202A..=0x202E
        | 0x2060..=0x2064
        | 0x2066..=0x206F
        | 0xFEFF
        | 0xFFF9..=0xFFFB
        | 0x110BD
        | 0x110CD
        | 0x13430..=0x1343F
        | 0x1BCA0..=0x1BCA3
        | 0x1D173..=0x1D17A
        | 0xE0001
        | 0xE0020..=0xE007F => true,
        _ => false,
    }
}

// Unicode 'Co' category.
fn is_private_use(c: char) -> bool {
    match c as u32 {
        0xE000..=0xF8FF
        | 0xF0000..=0xFFFFD
        | 0x100000..=0x10FFFD => true,
        _ => false,
    }
}
