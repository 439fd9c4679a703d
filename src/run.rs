// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io::{self, Write};

use crate::error::Error;
use crate::extract::{extract_from, TextLine};
use crate::input::Input;
use crate::options::Options;

/// The highest exit code used for failed inputs.
///
/// 255 is left for an interrupted run.
const MAX_FAILURE_CODE: u8 = 254;

/// The result of processing a list of inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunOutcome {
    /// Number of inputs that can't be opened, read or parsed.
    pub failures: usize,
}

impl RunOutcome {
    /// Returns the process exit code.
    pub fn exit_code(&self) -> u8 {
        if self.failures > MAX_FAILURE_CODE as usize {
            MAX_FAILURE_CODE
        } else {
            self.failures as u8
        }
    }

    /// Checks that all inputs were processed.
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// Prints the text lines of all inputs.
///
/// Inputs are processed one by one, in order. A failed input is reported to `err`
/// as `<program_name>: <input>: <reason>` and the processing continues.
///
/// Returns an error only when writing to `out` or `err` fails.
pub fn run<W, E>(
    inputs: &[Input],
    opt: &Options,
    program_name: &str,
    out: &mut W,
    err: &mut E,
) -> io::Result<RunOutcome>
    where W: Write, E: Write
{
    let mut outcome = RunOutcome::default();

    for input in inputs {
        match process(input, opt) {
            Ok(lines) => {
                for line in &lines {
                    write_line(out, line)?;
                }
            }
            Err(e) => {
                debug!("Failed to process '{}'.", e.name());
                writeln!(err, "{}: {}", program_name, e)?;
                outcome.failures += 1;
            }
        }
    }

    out.flush()?;

    Ok(outcome)
}

fn process(input: &Input, opt: &Options) -> Result<Vec<TextLine>, Error> {
    let source = input.open()?;
    extract_from(source, &input.name(), opt)
}

// A line is written at once, so the output never ends with a partial line.
fn write_line<W: Write>(out: &mut W, line: &TextLine) -> io::Result<()> {
    let mut s = line.to_string();
    s.push('\n');
    out.write_all(s.as_bytes())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_is_capped() {
        assert_eq!(RunOutcome { failures: 0 }.exit_code(), 0);
        assert_eq!(RunOutcome { failures: 3 }.exit_code(), 3);
        assert_eq!(RunOutcome { failures: 254 }.exit_code(), 254);
        assert_eq!(RunOutcome { failures: 255 }.exit_code(), 254);
        assert_eq!(RunOutcome { failures: 100_000 }.exit_code(), 254);
    }
}
