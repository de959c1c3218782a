//! `reqreplay replay` – send every URL and save the captures.

use anyhow::{Context, Result};
use reqreplay_core::config::ReplayConfig;
use reqreplay_core::outline::Document;
use reqreplay_core::replay::{self, CurlTransport, ReplaySummary};
use std::path::{Path, PathBuf};

use super::load::{parse_all, FailureTally};

/// Replay one document on a blocking thread (libcurl is synchronous).
async fn replay_one(
    cfg: &ReplayConfig,
    method: &str,
    base: PathBuf,
    doc: Document,
) -> Result<ReplaySummary> {
    let transport = CurlTransport::new(cfg.transport_options());
    let policy = cfg.retry_policy();
    let method = method.to_string();
    tokio::task::spawn_blocking(move || {
        replay::replay_document(&doc, &method, &base, &transport, &policy)
    })
    .await
    .context("replay task join")?
    .map_err(anyhow::Error::from)
}

pub async fn run_replay(
    cfg: &ReplayConfig,
    method: &str,
    output_dir: Option<&Path>,
    files: &[PathBuf],
) -> Result<()> {
    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir {}", dir.display()))?;
    }

    let bases = replay::capture_bases(files, output_dir);
    let mut tally = FailureTally::default();
    for ((path, parsed), base) in parse_all(files).await.into_iter().zip(bases) {
        let doc = match parsed {
            Ok(doc) => doc,
            Err(e) => {
                tally.fail(&e);
                continue;
            }
        };
        match replay_one(cfg, method, base, doc)
            .await
            .with_context(|| format!("replay of '{}' failed", path.display()))
        {
            Ok(summary) => {
                for c in &summary.captures {
                    println!("{} {} => {} ({})", method, c.url, c.status, c.body_path.display());
                }
                tally.ok();
            }
            Err(e) => tally.fail(&e),
        }
    }
    tally.finish()
}
