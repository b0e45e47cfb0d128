//! Console front end for the Pythia oracle.
//!
//! Reads questions line by line from stdin and hands them to the pipeline;
//! answers appear on stdout whenever the oracle so decides.

use anyhow::Result;
use pythia::oracle::{Oracle, StdoutSink};
use pythia::types::OracleConfig;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let config = OracleConfig::default();
    println!("Welcome to {}, the oracle at {}.", config.name, config.venue);
    println!("Your questions will be answered in due time.");

    let name = config.name.clone();
    let prompt = config.prompt.clone();
    let oracle = Oracle::start(config, StdoutSink::new());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        println!("{name} heard: {line}");
        oracle.submit(line);
    }

    // Stdin closed; render whatever is still in flight before exiting.
    oracle.shutdown().await;
    Ok(())
}
