// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// Per-input errors.
///
/// Every variant carries the name of the offending input, so the `Display`
/// output is always `<name>: <reason>`.
#[derive(Debug)]
pub enum Error {
    /// The input can't be opened.
    Open {
        /// Input name as given on the command line.
        name: String,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The input was opened, but reading from it failed.
    Read {
        /// Input name as given on the command line.
        name: String,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The input is not a well-formed XML document.
    Parse {
        /// Input name as given on the command line.
        name: String,
        /// What went wrong.
        source: ParseError,
    },
}

impl Error {
    /// Returns the name of the input that caused the error.
    pub fn name(&self) -> &str {
        match *self {
            Error::Open { ref name, .. } => name,
            Error::Read { ref name, .. } => name,
            Error::Parse { ref name, .. } => name,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Open { ref name, ref source } => {
                write!(f, "{}: {}", name, os_reason(source))
            }
            Error::Read { ref name, ref source } => {
                write!(f, "{}: {}", name, os_reason(source))
            }
            Error::Parse { ref name, ref source } => {
                write!(f, "{}: {}", name, source)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Open { ref source, .. } => Some(source),
            Error::Read { ref source, .. } => Some(source),
            Error::Parse { ref source, .. } => Some(source),
        }
    }
}


/// Document parsing errors.
#[derive(Debug)]
pub enum ParseError {
    /// The data is not valid in the detected encoding.
    Malformed(&'static str),

    /// The XML declaration names an encoding that is not supported.
    UnknownEncoding(String),

    /// A `roxmltree` error.
    RoXmlError(roxmltree::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Malformed(name) => {
                write!(f, "malformed {} data", name)
            }
            ParseError::UnknownEncoding(ref label) => {
                write!(f, "unknown encoding '{}'", label)
            }
            ParseError::RoXmlError(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ParseError::Malformed(_) => None,
            ParseError::UnknownEncoding(_) => None,
            ParseError::RoXmlError(ref e) => Some(e),
        }
    }
}

impl From<roxmltree::Error> for ParseError {
    fn from(value: roxmltree::Error) -> Self {
        ParseError::RoXmlError(value)
    }
}

/// Formats an OS error the way `strerror` does.
///
/// `io::Error` appends ` (os error N)` to the message, which is dropped here.
pub(crate) fn os_reason(e: &io::Error) -> String {
    let text = e.to_string();
    match text.rfind(" (os error ") {
        Some(idx) if text.ends_with(')') => text[..idx].to_string(),
        _ => text,
    }
}
