// ABOUTME: CLI for scraping the funding portal with fundboard-client.
// ABOUTME: Fetches listing/detail pages (or parses local HTML files) and prints JSON records.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fundboard_client::{Client, DEFAULT_BASE_URL};
use fundboard_extract::{extract_application, extract_post_evaluation};
use scraper::Html;
use serde_json::Value;

/// Scrape the funding portal and print records as JSON.
#[derive(Parser, Debug)]
#[command(name = "fundboard")]
#[command(about = "Scrape funding-portal listings and detail pages, printing JSON", long_about = None)]
struct Args {
    /// Portal root URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the event listing for a term.
    Events { term: String },

    /// Print one application record. The target is an event id (fetch
    /// mode), a local HTML file path, or "-" to read HTML from stdin.
    Application { target: String },

    /// Print one post-evaluation record. Same targets as `application`.
    Evaluation { target: String },

    /// Scrape a whole term: the listing plus per-event detail records.
    Term {
        term: String,

        /// Follow at most this many listing rows.
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::builder().base_url(&args.base_url).build();

    let output = match &args.command {
        Command::Events { term } => serde_json::to_value(client.events(term).await?)?,
        Command::Application { target } => match target.parse::<u32>() {
            Ok(event_id) => serde_json::to_value(client.application(event_id).await?)?,
            Err(_) => {
                let doc = load_document(target)?;
                serde_json::to_value(extract_application(&doc)?)?
            }
        },
        Command::Evaluation { target } => match target.parse::<u32>() {
            Ok(event_id) => serde_json::to_value(client.post_evaluation(event_id).await?)?,
            Err(_) => {
                let doc = load_document(target)?;
                serde_json::to_value(extract_post_evaluation(&doc))?
            }
        },
        Command::Term { term, limit } => {
            serde_json::to_value(client.scrape_term(term, *limit).await?)?
        }
    };

    print_json(&output, args.compact)?;
    Ok(())
}

/// Reads a local HTML document from a file path or stdin ("-").
fn load_document(target: &str) -> Result<Html> {
    let html = if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        let path = PathBuf::from(target);
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
    };
    Ok(Html::parse_document(&html))
}

fn print_json(output: &Value, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(output)?);
    }
    Ok(())
}
