// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/*!
This library extracts the human-readable text of SVG documents.

Every `text` element in the SVG namespace becomes one [`TextLine`]:

- the optional `id` of the element
- the text of the element and all its descendants, joined together

Processing a list of files is done by [`run`], which writes one line per text
element to an output stream and reports files that can't be opened or parsed
to an error stream, without stopping.

```
use svgtext::{extract_str, Options};

let opt = Options { print_ids: true, collapse_whitespace: true, ..Options::default() };
let lines = extract_str(
    "<svg xmlns='http://www.w3.org/2000/svg'><text id='t1'>Hello  World</text></svg>",
    "-",
    &opt,
).unwrap();

assert_eq!(lines[0].to_string(), "t1: 'Hello World'");
```

The XML itself is parsed by [roxmltree](https://docs.rs/roxmltree).

[`TextLine`]: struct.TextLine.html
[`run`]: fn.run.html
*/

#![doc(html_root_url = "https://docs.rs/svgtext/0.1.0")]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use encoding::decode;
pub use error::{Error, ParseError};
pub use extract::{
    collapse_whitespace,
    element_text,
    extract_from,
    extract_lines,
    extract_str,
    leading_text,
    parse,
    text_elements,
    TextLine,
    SVG_NS,
    TEXT_TAG,
};
pub use input::{inputs_from_args, Input, Source, STDIN_TOKEN};
pub use options::Options;
pub use quote::quote;
pub use run::{run, RunOutcome};

mod encoding;
mod error;
mod extract;
mod input;
mod options;
mod quote;
mod run;
