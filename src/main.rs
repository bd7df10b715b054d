use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use ael::parse_named;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map(String::as_str).unwrap_or("ael"));
        return ExitCode::FAILURE;
    }

    let file_path = Path::new(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    match parse_named(&source, Some(file_name)) {
        Ok(program) => {
            tracing::info!(elapsed = ?start.elapsed(), statements = program.len(), "parsed");
            println!("{:#?}", program);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error.render(&source));
            ExitCode::FAILURE
        }
    }
}
