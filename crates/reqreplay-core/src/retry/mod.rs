//! Retry and backoff for replayed requests.
//!
//! Only transport failures are retried; any HTTP response, whatever its
//! status, is a capture and is never retried.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
