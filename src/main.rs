//! CLI driver that runs the scanner over a Decaf source file.

use std::fs;
use std::process::ExitCode;

use decaf_lex::TokenOrError;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: decafc [options] <source-file>");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -target <stage>  Compilation stage to run (default: scan)");
        eprintln!("  -o <file>        Write output to <file> instead of stdout");
        eprintln!();
        eprintln!("Stages:");
        eprintln!("  scan  Print one line per token or lexical error");
        return ExitCode::from(2);
    }

    let mut target = String::from("scan");
    let mut source_file = None;
    let mut output_file = None;

    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "-target" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    eprintln!("Missing value for -target");
                    return ExitCode::from(2);
                };
                target = value.clone();
            }
            "-o" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    eprintln!("Missing value for -o");
                    return ExitCode::from(2);
                };
                output_file = Some(value.clone());
            }
            option if option.starts_with('-') => {
                eprintln!("Unrecognized option: {option}");
                return ExitCode::from(2);
            }
            path => {
                if source_file.is_some() {
                    eprintln!("Error: more than one source file specified");
                    return ExitCode::from(2);
                }
                source_file = Some(path.to_string());
            }
        }
        index += 1;
    }

    let Some(source_file) = source_file else {
        eprintln!("Error: no source file specified");
        return ExitCode::from(2);
    };

    if target != "scan" {
        eprintln!("Unknown target: {target}");
        return ExitCode::from(2);
    }

    let source = match fs::read_to_string(&source_file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{source_file}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = decaf_lex::scan(&source, &source_file);

    let mut lines = String::new();
    for element in &output {
        lines.push_str(&element.to_string());
        lines.push('\n');
    }

    if let Some(path) = output_file {
        if let Err(e) = fs::write(&path, &lines) {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    } else {
        print!("{lines}");
    }

    if output.iter().any(TokenOrError::is_error) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
