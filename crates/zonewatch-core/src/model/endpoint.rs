// ── Remote query endpoints ──

use serde::{Deserialize, Serialize};
use url::Url;

/// A live LCD address and the last block height observed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub url: Url,
    pub block_height: u64,
}

impl Endpoint {
    pub fn new(url: Url, block_height: u64) -> Self {
        Self { url, block_height }
    }
}

/// Pick the most advanced endpoint: highest block height, ties going to
/// the lexicographically smallest URL so the choice is stable across runs.
pub fn select_best_endpoint(candidates: impl IntoIterator<Item = Endpoint>) -> Option<Endpoint> {
    candidates.into_iter().max_by(|a, b| {
        a.block_height
            .cmp(&b.block_height)
            .then_with(|| b.url.as_str().cmp(a.url.as_str()))
    })
}
