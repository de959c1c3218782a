//! `reqreplay check` – parse only and describe what would be replayed.

use anyhow::Result;
use reqreplay_core::outline::Document;
use std::path::{Path, PathBuf};

use super::load::{parse_all, FailureTally};

/// One-line description, e.g. `a.txt: 3 URL(s); GET (2 headers), POST (1 headers)`.
pub(crate) fn summarize(path: &Path, doc: &Document) -> String {
    let methods: Vec<String> = doc
        .headers
        .iter()
        .map(|(m, h)| format!("{} ({} headers)", m, h.len()))
        .collect();
    let methods = if methods.is_empty() {
        "no headers".to_string()
    } else {
        methods.join(", ")
    };
    format!("{}: {} URL(s); {}", path.display(), doc.urls.len(), methods)
}

pub async fn run_check(files: &[PathBuf], json: bool) -> Result<()> {
    let mut tally = FailureTally::default();
    for (path, parsed) in parse_all(files).await {
        let doc = match parsed {
            Ok(doc) => doc,
            Err(e) => {
                tally.fail(&e);
                continue;
            }
        };
        if json {
            let value = serde_json::json!({ "file": path.display().to_string(), "document": doc });
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", summarize(&path, &doc));
        }
        tally.ok();
    }
    tally.finish()
}
