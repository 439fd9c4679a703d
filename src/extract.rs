// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use roxmltree::{Document, Node, ParsingOptions};

use crate::encoding::decode;
use crate::error::{Error, ParseError};
use crate::options::Options;
use crate::quote::quote;

/// The SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Local name of the text element.
pub const TEXT_TAG: &str = "text";

/// A single line of output, produced by one `text` element.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    /// Element's `id`. Set only when ids were requested.
    pub id: Option<String>,
    /// Element's text, unquoted.
    pub text: String,
}

impl fmt::Display for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.id {
            Some(ref id) => write!(f, "{}: {}", id, quote(&self.text)),
            None => write!(f, "{}", quote(&self.text)),
        }
    }
}

/// Parses a document.
pub fn parse<'input>(text: &'input str, opt: &Options)
    -> Result<Document<'input>, roxmltree::Error>
{
    let mut xml_opt = ParsingOptions::default();
    xml_opt.allow_dtd = opt.allow_dtd;

    Document::parse_with_options(text, xml_opt)
}

/// Returns all SVG `text` elements of the document in document order.
///
/// Nested `text` elements are returned too, each one after its parent.
pub fn text_elements<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
    doc.root()
        .descendants()
        .filter(|n| n.has_tag_name((SVG_NS, TEXT_TAG)))
        .collect()
}

/// Returns the text placed directly inside an element, before its first child element.
///
/// Comments and processing instructions don't split the text.
/// Returns `None` for an empty text.
pub fn leading_text<'a>(node: Node<'a, '_>) -> Option<Cow<'a, str>> {
    let mut text: Option<Cow<'a, str>> = None;
    for child in node.children().take_while(|n| !n.is_element()) {
        if !child.is_text() {
            continue;
        }

        if let Some(s) = child.text() {
            text = match text {
                None => Some(Cow::Borrowed(s)),
                Some(prev) => Some(Cow::Owned(prev.into_owned() + s)),
            };
        }
    }

    text.filter(|t| !t.is_empty())
}

/// Returns the joined text of an element and all its descendant elements.
///
/// Only the text before the first child element of each element is taken.
/// Text that follows a child's closing tag is skipped.
pub fn element_text(node: Node) -> String {
    let mut text = String::new();
    for n in node.descendants().filter(|n| n.is_element()) {
        if let Some(s) = leading_text(n) {
            text.push_str(&s);
        }
    }

    text
}

/// Collapses whitespace runs into a single space and trims the result.
///
/// ```
/// assert_eq!(svgtext::collapse_whitespace("\t Hello \n\n World  "), "Hello World");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/// Converts every SVG `text` element of the document into a `TextLine`.
pub fn extract_lines(doc: &Document, opt: &Options) -> Vec<TextLine> {
    text_elements(doc).into_iter().map(|node| {
        let mut text = element_text(node);
        if opt.collapse_whitespace {
            text = collapse_whitespace(&text);
        }

        let id = if opt.print_ids {
            Some(element_id(doc, node))
        } else {
            None
        };

        TextLine { id, text }
    }).collect()
}

fn element_id(doc: &Document, node: Node) -> String {
    match node.attribute("id") {
        Some(id) => id.to_string(),
        None => {
            warn!("The text element at {} has no 'id' attribute.",
                  doc.text_pos_at(node.range().start));
            String::new()
        }
    }
}

/// Parses a document and extracts its text lines.
///
/// `name` is used only for error reporting.
pub fn extract_str(text: &str, name: &str, opt: &Options) -> Result<Vec<TextLine>, Error> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let doc = parse(text, opt).map_err(|e| Error::Parse {
        name: name.to_string(),
        source: ParseError::from(e),
    })?;

    let lines = extract_lines(&doc, opt);
    debug!("'{}' has {} text element(s).", name, lines.len());

    Ok(lines)
}

/// Reads a document from a stream and extracts its text lines.
///
/// The stream is read to the end before parsing. Non-UTF-8 data is decoded
/// according to its byte order mark or XML declaration.
pub fn extract_from<R: Read>(mut reader: R, name: &str, opt: &Options)
    -> Result<Vec<TextLine>, Error>
{
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(|e| Error::Read {
        name: name.to_string(),
        source: e,
    })?;

    let text = decode(&data).map_err(|e| Error::Parse {
        name: name.to_string(),
        source: e,
    })?;

    extract_str(&text, name, opt)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn first_text(xml: &str) -> String {
        let doc = Document::parse(xml).unwrap();
        let nodes = text_elements(&doc);
        element_text(nodes[0])
    }

    #[test]
    fn collapse_is_idempotent() {
        for s in &["", "   ", " a  b ", "a\tb\nc\rd\x0Ce", "no-spaces"] {
            let once = collapse_whitespace(s);
            assert_eq!(collapse_whitespace(&once), once);
        }
    }

    #[test]
    fn collapse_all_whitespace_is_empty() {
        assert_eq!(collapse_whitespace(" \t\r\n\x0C "), "");
    }

    #[test]
    fn collapse_keeps_nbsp() {
        assert_eq!(collapse_whitespace("a\u{A0}b"), "a\u{A0}b");
    }

    #[test]
    fn text_joined_without_separator() {
        let text = first_text(
            "<svg xmlns='http://www.w3.org/2000/svg'>\
             <text>a<tspan>b<tspan>c</tspan></tspan></text></svg>");
        assert_eq!(text, "abc");
    }

    #[test]
    fn tail_text_is_skipped() {
        let text = first_text(
            "<svg xmlns='http://www.w3.org/2000/svg'>\
             <text>A <tspan>b</tspan> c</text></svg>");
        assert_eq!(text, "A b");
    }

    #[test]
    fn comment_does_not_split_text() {
        let text = first_text(
            "<svg xmlns='http://www.w3.org/2000/svg'>\
             <text>He<!-- x -->llo<?pi data?>!</text></svg>");
        assert_eq!(text, "Hello!");
    }

    #[test]
    fn cdata_is_text() {
        let text = first_text(
            "<svg xmlns='http://www.w3.org/2000/svg'><text><![CDATA[a<b]]></text></svg>");
        assert_eq!(text, "a<b");
    }

    #[test]
    fn empty_element_has_no_leading_text() {
        let doc = Document::parse("<svg xmlns='http://www.w3.org/2000/svg'><text/></svg>").unwrap();
        let nodes = text_elements(&doc);
        assert_eq!(leading_text(nodes[0]), None);
    }

    #[test]
    fn line_display() {
        let line = TextLine { id: Some("t1".to_string()), text: "Hi".to_string() };
        assert_eq!(line.to_string(), "t1: 'Hi'");

        let line = TextLine { id: Some(String::new()), text: "Hi".to_string() };
        assert_eq!(line.to_string(), ": 'Hi'");

        let line = TextLine { id: None, text: String::new() };
        assert_eq!(line.to_string(), "''");
    }
}
