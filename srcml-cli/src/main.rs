//! Command-line interface for py2srcml
//!
//! Converts Python source files to srcML markup, one translation unit per
//! file, printed to standard output.
//!
//! Usage:
//!   py2srcml `<path>`...                - Convert each file to srcML
//!   py2srcml `<path>` --format ast-json - Dump the lowered syntax tree as JSON

use clap::{Arg, Command};
use std::process;

fn main() {
    let matches = Command::new("py2srcml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Python source files to srcML markup")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Python source files to convert")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["srcml", "ast-json"])
                .default_value("srcml"),
        )
        .get_matches();

    let format = matches.get_one::<String>("format").expect("has a default");
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .expect("paths are required")
        .collect();

    // Each file is one independent translation unit: a conversion failure
    // is reported and later files are still processed.
    let mut failed = false;
    for path in paths {
        if let Err(message) = convert_file(path, format) {
            eprintln!("{}", message);
            failed = true;
        }
    }
    if failed {
        process::exit(1);
    }
}

/// Parses, lowers and converts one source file, printing the result
fn convert_file(path: &str, format: &str) -> Result<(), String> {
    // An unreadable input path is fatal for the whole invocation.
    let source = std::fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Unable to read {}: {}", path, err);
        process::exit(1);
    });

    let module = srcml_python::parse_module(&source, path).map_err(|err| err.to_string())?;

    let output = match format {
        "ast-json" => serde_json::to_string_pretty(&module)
            .map_err(|err| format!("Error formatting tree for {}: {}", path, err))?,
        _ => srcml_emit::convert_unit(path, &module).map_err(|err| err.to_string())?,
    };
    println!("{}", output);
    Ok(())
}
