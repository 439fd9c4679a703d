// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Output text strings from SVG.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use log::{warn, LevelFilter};

use svgtext::{inputs_from_args, run, Options};

const PROGRAM_NAME: &str = env!("CARGO_BIN_NAME");

/// Exit code of a run that was interrupted or lost its output.
const ABORT_CODE: i32 = 255;

/// Output text strings from SVG.
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    version = concat!("v", env!("CARGO_PKG_VERSION"))
)]
struct Cli {
    /// Print the ID for each text element
    #[arg(short, long)]
    id: bool,

    /// Collapse whitespace in text strings
    #[arg(short, long)]
    whitespace: bool,

    /// Log processing details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// SVG files or stdin if none provided
    #[arg(value_name = "SVG_FILE")]
    svg_files: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = init_logger(level) {
        eprintln!("{}: {}", PROGRAM_NAME, e);
    }

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("Keyboard interrupt");
        process::exit(ABORT_CODE);
    }) {
        warn!("Failed to install the interrupt handler: {}.", e);
    }

    let opt = Options {
        print_ids: cli.id,
        collapse_whitespace: cli.whitespace,
        ..Options::default()
    };

    let inputs = inputs_from_args(&cli.svg_files);

    // Stderr stays unlocked, the interrupt handler writes to it from another thread.
    let stdout = io::stdout();
    let res = run(&inputs, &opt, PROGRAM_NAME, &mut stdout.lock(), &mut io::stderr());

    match res {
        Ok(outcome) => process::exit(i32::from(outcome.exit_code())),
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => {
            eprintln!("Broken pipe");
            process::exit(ABORT_CODE);
        }
        Err(e) => {
            let _ = writeln!(io::stderr(), "{}: {}", PROGRAM_NAME, e);
            process::exit(ABORT_CODE);
        }
    }
}

fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record|
            out.finish(format_args!("{}: {}", record.level(), message))
        )
        .level(level)
        .chain(io::stderr())
        .apply()
}
