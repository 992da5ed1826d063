//! Fetches a Wiktionary article and prints the extracted record as JSON.
//!
//! Usage: `lookup <word> [de|en]` (language defaults to `en`)
//!
//! Requires the `cli` feature: `cargo run --features cli --bin lookup`.
//!
//! Set `RUST_LOG=rs_wiktionary=debug` to trace requests and missing
//! landmarks.

use rs_wiktionary::Client;
use std::env;
use std::error::Error;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(word) = args.next() else {
        eprintln!("Usage: lookup <word> [de|en]");
        std::process::exit(1);
    };
    let language = args.next().unwrap_or_else(|| "en".to_string());

    let client = Client::new()?;
    let (article, info) = client.fetch_and_parse(&word, &language)?;
    tracing::info!(title = %article.title, bytes = article.html.len(), "article retrieved");

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
