// LCD API HTTP client
//
// Wraps `reqwest::Client` with LCD URL construction, Cosmos error-body
// decoding and cursor pagination. Endpoint methods live in `ibc.rs` as
// inherent methods so this module stays focused on transport mechanics.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::lcd::models::{ErrorBody, Paged};
use crate::transport::TransportConfig;

/// Default page size requested from the node.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Raw HTTP client for one node's LCD endpoint.
///
/// The `base_url` is the LCD root (e.g. `https://lcd.cosmoshub.example`),
/// optionally with a path prefix when the node sits behind a proxy.
pub struct LcdClient {
    http: reqwest::Client,
    base_url: Url,
    page_limit: u32,
}

impl LcdClient {
    /// Create a new client with its own `reqwest::Client`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    ///
    /// The checker builds one HTTP client per run and hands it to a fresh
    /// `LcdClient` for every zone it queries.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Override the `pagination.limit` sent with list requests.
    #[must_use]
    pub fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    /// The LCD base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an LCD path, keeping any prefix on the base.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        Self::parse_body(resp).await
    }

    /// Walk every page of a list endpoint and concatenate the items.
    ///
    /// Follows `pagination.next_key` until the node returns a null or empty
    /// key. A key seen twice aborts with `Error::PaginationLoop`.
    pub(crate) async fn get_all<P: Paged>(&self, path: &str) -> Result<Vec<P::Item>, Error> {
        let mut items = Vec::new();
        let mut seen_keys = HashSet::new();
        let mut next_key: Option<String> = None;

        loop {
            let mut url = self.api_url(path)?;
            {
                let mut query = url.query_pairs_mut();
                query.append_pair("pagination.limit", &self.page_limit.to_string());
                if let Some(ref key) = next_key {
                    query.append_pair("pagination.key", key);
                }
            }

            let page: P = self.get(url).await?;
            let (mut page_items, pagination) = page.into_parts();
            trace!(count = page_items.len(), "received page");
            items.append(&mut page_items);

            let Some(key) = pagination.as_ref().and_then(|p| p.next()) else {
                break;
            };
            if !seen_keys.insert(key.to_owned()) {
                return Err(Error::PaginationLoop {
                    key: key.to_owned(),
                });
            }
            next_key = Some(key.to_owned());
        }

        Ok(items)
    }

    /// Decode a response: Cosmos error bodies and non-2xx statuses become
    /// errors, everything else is parsed as `T`.
    async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ErrorBody>(&body) {
                return Err(Error::Lcd {
                    code: err.code,
                    message: err.message.unwrap_or_default(),
                });
            }
            return Err(Error::Http {
                status: status.as_u16(),
                message: preview(&body).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body: body.clone(),
        })
    }
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
