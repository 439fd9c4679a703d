// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::ParseError;

/// How far to look for the end of the XML declaration.
const DECL_SCAN_LIMIT: usize = 1024;

/// Decodes raw document data into a string.
///
/// The encoding is taken from, in order:
///
/// - a byte order mark
/// - the UTF-16 layout of `<?` at the start of the document
/// - the `encoding` of the XML declaration
///
/// UTF-8 is used otherwise. The BOM is not part of the result.
pub fn decode(data: &[u8]) -> Result<Cow<str>, ParseError> {
    let (encoding, body) = detect(data)?;
    match encoding.decode_without_bom_handling_and_without_replacement(body) {
        Some(text) => Ok(text),
        None => Err(ParseError::Malformed(encoding.name())),
    }
}

fn detect(data: &[u8]) -> Result<(&'static Encoding, &[u8]), ParseError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(data) {
        return Ok((encoding, &data[bom_len..]));
    }

    if data.starts_with(b"<\0?\0") {
        return Ok((UTF_16LE, data));
    }

    if data.starts_with(b"\0<\0?") {
        return Ok((UTF_16BE, data));
    }

    let encoding = match declared_encoding(data) {
        Some(label) => {
            Encoding::for_label(label).ok_or_else(|| {
                ParseError::UnknownEncoding(String::from_utf8_lossy(label).into_owned())
            })?
        }
        None => UTF_8,
    };

    // The declaration was readable as ASCII, so the data is not UTF-16.
    if encoding == UTF_16LE || encoding == UTF_16BE {
        return Ok((UTF_8, data));
    }

    Ok((encoding, data))
}

/// Returns the `encoding` value of the XML declaration.
fn declared_encoding(data: &[u8]) -> Option<&[u8]> {
    let head = &data[..data.len().min(DECL_SCAN_LIMIT)];
    if !head.starts_with(b"<?xml") {
        return None;
    }

    let decl = &head[..find(head, b"?>")?];
    let pos = find(decl, b"encoding")? + b"encoding".len();
    let rest = trim_start(&decl[pos..]);
    let rest = trim_start(rest.strip_prefix(b"=")?);

    let quote = *rest.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let value = &rest[1..];
    let len = value.iter().position(|&b| b == quote)?;
    Some(&value[..len])
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn trim_start(s: &[u8]) -> &[u8] {
    let n = s.iter().take_while(|b| b.is_ascii_whitespace()).count();
    &s[n..]
}
