//! CLI entry point for the `ddlcheck` tool.
//!
//! Resolves the parameter types of a routine signature passed as the first
//! argument and prints one canonical type name per line.

use std::io::{self, Write};
use std::process::ExitCode;

use ddlcheck::{BuiltinCatalog, parse_parameter_types};

fn run(signature: &str) -> ddlcheck::Result<Vec<String>> {
    let types = parse_parameter_types(signature, &BuiltinCatalog)?;
    Ok(types.iter().map(ToString::to_string).collect())
}

fn main() -> ExitCode {
    let Some(signature) = std::env::args().nth(1) else {
        let _ = writeln!(io::stderr(), "usage: ddlcheck '<NAME(TYPES) RETURN TYPE>'");
        return ExitCode::from(2);
    };
    match run(&signature) {
        Ok(names) => {
            let mut out = io::stdout().lock();
            for name in names {
                if writeln!(out, "{name}").is_err() {
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = writeln!(io::stderr(), "ddlcheck: {err}");
            ExitCode::FAILURE
        }
    }
}
