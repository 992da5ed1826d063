//! Reads article HTML from stdin and prints the extracted record as JSON.
//!
//! Usage: `extract_stdin <de|en> [title]`
//!
//! Requires the `cli` feature: `cargo run --features cli --bin extract_stdin`.

use rs_wiktionary::{extract, Article};
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(language) = args.next() else {
        eprintln!("Usage: extract_stdin <de|en> [title]");
        return ExitCode::FAILURE;
    };
    let title = args.next().unwrap_or_default();

    let mut html = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut html) {
        eprintln!("Failed to read from stdin: {e}");
        return ExitCode::FAILURE;
    }

    let article = Article::new(title, html, language);
    match extract(&article) {
        Ok(info) => match serde_json::to_string_pretty(&info) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize record: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
