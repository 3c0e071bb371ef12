//! `json-validate`: validate a JSON document against a descriptor.
//!
//! Usage:
//!   json-validate [--strict | --keep] <descriptor-file>
//!
//! The document is read from stdin. On success the normalized document is
//! written to stdout. Each mismatch is written to stderr as
//! `<pointer>: expected <kind>, found <kind>` and the exit code is 1.
//! Any other failure exits with 2.

use json_joy_json_descriptor::cli::{validate_document, CliError};
use json_joy_json_descriptor::{UnknownKeys, ValidatorOptions};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut opts = ValidatorOptions::default();
    let mut file = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => opts.unknown_keys = UnknownKeys::Reject,
            "--keep" => opts.unknown_keys = UnknownKeys::Keep,
            _ if file.is_none() => file = Some(arg),
            _ => {
                eprintln!("Unexpected argument: {arg}");
                std::process::exit(2);
            }
        }
    }
    let Some(file) = file else {
        eprintln!("First argument must be a descriptor file.");
        std::process::exit(2);
    };

    let descriptor = match std::fs::read_to_string(&file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{file}: {e}");
            std::process::exit(2);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    match validate_document(&descriptor, buf.trim(), &opts) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(2);
            }
        }
        Err(CliError::Invalid(errors)) => {
            for error in &errors {
                eprintln!("{error}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
