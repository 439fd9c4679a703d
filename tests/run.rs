// Copyright 2024 The svgtext Authors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use] extern crate pretty_assertions;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::TempDir;

use svgtext::{run, Input, Options, RunOutcome};

const HI: &str = "<svg xmlns='http://www.w3.org/2000/svg'><text id='h'>Hi</text></svg>";

fn write_file(dir: &Path, name: &str, text: &str) -> Input {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    Input::Path(path)
}

fn run_str(inputs: &[Input], opt: &Options) -> (String, String, RunOutcome) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = run(inputs, opt, "svgtext", &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), outcome)
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_file(dir.path(), "hi.svg", HI),
        Input::Path(dir.path().join("missing.svg")),
    ];

    let (out, err, outcome) = run_str(&inputs, &Options::default());
    assert_eq!(out, "'Hi'\n");
    assert_eq!(err, format!("svgtext: {}: No such file or directory\n",
                            dir.path().join("missing.svg").display()));
    assert_eq!(outcome, RunOutcome { failures: 1 });
    assert_eq!(outcome.exit_code(), 1);
}

#[test]
fn processing_continues_after_failure() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        Input::Path(dir.path().join("a.svg")),
        write_file(dir.path(), "bad.svg", "<svg"),
        Input::Path(dir.path().to_path_buf()),
        write_file(dir.path(), "hi.svg", HI),
    ];

    let opt = Options { print_ids: true, ..Options::default() };
    let (out, err, outcome) = run_str(&inputs, &opt);
    assert_eq!(out, "h: 'Hi'\n");
    assert_eq!(err.lines().count(), 3);
    assert!(err.lines().all(|l| l.starts_with("svgtext: ")));
    assert!(err.lines().nth(2).unwrap().ends_with(": Is a directory"));
    assert_eq!(outcome.failures, 3);
    assert!(!outcome.is_success());
}

#[test]
fn files_are_printed_in_order() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write_file(dir.path(), "2.svg",
                   "<svg xmlns='http://www.w3.org/2000/svg'><text>b</text><text>c</text></svg>"),
        write_file(dir.path(), "1.svg",
                   "<svg xmlns='http://www.w3.org/2000/svg'><text>a</text></svg>"),
    ];

    let (out, err, outcome) = run_str(&inputs, &Options::default());
    assert_eq!(out, "'b'\n'c'\n'a'\n");
    assert_eq!(err, "");
    assert!(outcome.is_success());
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn same_file_twice() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "hi.svg", HI);
    let (out, _, outcome) = run_str(&[input.clone(), input], &Options::default());
    assert_eq!(out, "'Hi'\n'Hi'\n");
    assert!(outcome.is_success());
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn closed_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![write_file(dir.path(), "hi.svg", HI)];

    let mut err = Vec::new();
    let res = run(&inputs, &Options::default(), "svgtext", &mut ClosedPipe, &mut err);
    assert_eq!(res.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    assert!(err.is_empty());
}
