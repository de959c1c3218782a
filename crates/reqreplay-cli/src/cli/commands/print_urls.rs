//! `reqreplay print-urls` – list URLs and their query parameters.

use anyhow::{Context, Result};
use reqreplay_core::outline::Document;
use reqreplay_core::url_model;
use std::path::PathBuf;

use super::load::{parse_all, FailureTally};

fn print_document(doc: &Document) -> Result<()> {
    for raw in &doc.urls {
        println!("{}:", raw);
        let listing = url_model::query_listing(raw).with_context(|| format!("parse URL {}", raw))?;
        for line in url_model::format_listing(&listing) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub async fn run_print_urls(files: &[PathBuf]) -> Result<()> {
    let mut tally = FailureTally::default();
    for (_, parsed) in parse_all(files).await {
        match parsed.and_then(|doc| print_document(&doc)) {
            Ok(()) => tally.ok(),
            Err(e) => tally.fail(&e),
        }
    }
    tally.finish()
}
