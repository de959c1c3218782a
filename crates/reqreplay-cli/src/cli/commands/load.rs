//! Parse outline files on blocking worker threads and collect per-file outcomes.

use anyhow::{Context, Result};
use reqreplay_core::logging;
use reqreplay_core::outline::{self, Document};
use std::path::PathBuf;

/// Parse every file concurrently, one isolated parser per file. Results come
/// back in argument order so output stays deterministic.
pub async fn parse_all(files: &[PathBuf]) -> Vec<(PathBuf, Result<Document>)> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            let task_path = path.clone();
            let handle = tokio::task::spawn_blocking(move || outline::parse_file(&task_path));
            (path, handle)
        })
        .collect();

    let mut out = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let res = match handle.await {
            Ok(parsed) => parsed.with_context(|| {
                format!("failed to parse requests file '{}'", path.display())
            }),
            Err(e) => Err(anyhow::Error::new(e).context("parse task join")),
        };
        out.push((path, res));
    }
    out
}

/// Tracks files that failed so the remaining ones can still be processed.
#[derive(Debug, Default)]
pub struct FailureTally {
    total: usize,
    failed: usize,
}

impl FailureTally {
    pub fn ok(&mut self) {
        self.total += 1;
    }

    pub fn fail(&mut self, err: &anyhow::Error) {
        self.total += 1;
        self.failed += 1;
        tracing::error!("{:#}", err);
        if !logging::logs_to_stderr() {
            eprintln!("reqreplay: {:#}", err);
        }
    }

    /// Err if any file failed.
    pub fn finish(self) -> Result<()> {
        if self.failed > 0 {
            anyhow::bail!("{} of {} file(s) failed", self.failed, self.total);
        }
        Ok(())
    }
}
