//! URL inspection helpers for the `print-urls` listing.

use std::collections::BTreeMap;
use url::Url;

/// Query parameters of `raw` grouped by key. Keys are sorted; values keep
/// their order of appearance. Keys and values are percent-decoded.
pub fn query_listing(raw: &str) -> Result<Vec<(String, Vec<String>)>, url::ParseError> {
    let url = Url::parse(raw)?;
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (k, v) in url.query_pairs() {
        grouped.entry(k.into_owned()).or_default().push(v.into_owned());
    }
    Ok(grouped.into_iter().collect())
}

/// ` - key=[v1 v2]` lines for a listing.
pub fn format_listing(listing: &[(String, Vec<String>)]) -> Vec<String> {
    listing
        .iter()
        .map(|(k, vs)| format!(" - {}=[{}]", k, vs.join(" ")))
        .collect()
}
