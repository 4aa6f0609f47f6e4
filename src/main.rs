use std::{env, fs::read_to_string, process::ExitCode};

use lsbasi::{interpreter::interpreter::Interpreter, render_error, run_program, SAMPLE_PROGRAM};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let source = match args.get(1) {
        Some(file_path) => match read_to_string(file_path) {
            Ok(contents) => contents,
            Err(error) => {
                eprintln!("Failed to read {}: {}", file_path, error);
                return ExitCode::FAILURE;
            }
        },
        None => String::from(SAMPLE_PROGRAM),
    };

    let mut interpreter = Interpreter::new();

    match run_program(&source, &mut interpreter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", render_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}
