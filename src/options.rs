// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Options that defines text extraction.
#[derive(Clone, Debug)]
pub struct Options {
    /// Prefix each line with the `id` of its text element.
    ///
    /// A text element without an `id` gets an empty prefix: `: 'text'`.
    pub print_ids: bool,

    /// Collapse whitespace in text strings.
    ///
    /// Runs of spaces, tabs, newlines, carriage returns and form feeds become
    /// a single space. Leading and trailing whitespace is removed.
    pub collapse_whitespace: bool,

    /// Accept documents with a DOCTYPE declaration.
    ///
    /// Entities declared in the internal subset are resolved.
    /// Enabled by default, since many SVG editors still write the SVG 1.1 DOCTYPE.
    pub allow_dtd: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            print_ids: false,
            collapse_whitespace: false,
            allow_dtd: true,
        }
    }
}
