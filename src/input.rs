// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::Error;

/// The token that stands for the standard input.
pub const STDIN_TOKEN: &str = "-";

/// A single input document.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// The process's standard input.
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl Input {
    /// Creates an input from a command line token.
    ///
    /// `-` means the standard input.
    pub fn from_arg<S: AsRef<OsStr> + ?Sized>(arg: &S) -> Input {
        let arg = arg.as_ref();
        if arg == STDIN_TOKEN {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }

    /// Returns the name used in diagnostics.
    pub fn name(&self) -> String {
        match *self {
            Input::Stdin => STDIN_TOKEN.to_string(),
            Input::Path(ref path) => path.display().to_string(),
        }
    }

    /// Opens the input for reading.
    ///
    /// The standard input is never looked up on the filesystem.
    /// A file is released when the returned `Source` is dropped.
    pub fn open(&self) -> Result<Source, Error> {
        let path = match *self {
            Input::Stdin => return Ok(Source::Stdin(io::stdin())),
            Input::Path(ref path) => path,
        };

        let open_err = |source: io::Error| Error::Open { name: self.name(), source };

        let file = fs::File::open(path).map_err(open_err)?;

        // Unix lets a directory be opened read-only, but reading it fails later.
        let meta = file.metadata().map_err(open_err)?;
        if meta.is_dir() {
            return Err(open_err(io::Error::new(io::ErrorKind::Other, "Is a directory")));
        }

        debug!("Opened '{}'.", path.display());
        Ok(Source::File(file))
    }
}

/// A readable input stream.
///
/// Dropping a `Source::File` closes the file.
/// Dropping a `Source::Stdin` leaves the standard input open.
#[derive(Debug)]
pub enum Source {
    /// The process's standard input.
    Stdin(io::Stdin),
    /// An opened file.
    File(fs::File),
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match *self {
            Source::Stdin(ref mut stdin) => stdin.read(buf),
            Source::File(ref mut file) => file.read(buf),
        }
    }
}

/// Converts command line tokens into inputs.
///
/// No tokens means a single standard input entry.
pub fn inputs_from_args<I, S>(args: I) -> Vec<Input>
    where I: IntoIterator<Item = S>, S: AsRef<OsStr>
{
    let mut list: Vec<Input> = args.into_iter().map(|a| Input::from_arg(&a)).collect();
    if list.is_empty() {
        list.push(Input::Stdin);
    }

    list
}
