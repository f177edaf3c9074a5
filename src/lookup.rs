//! Resolution client for the three remote lookups.
//!
//! Every operation degrades to `None` or an empty list on failure: network
//! errors, non-2xx statuses, malformed JSON and missing fields are logged and
//! swallowed here so the controller never sees an error.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use serde_json::Value;

use crate::constants::net;
use crate::types::{BlocklistEntry, Profile};

/// Remote lookups used by the search controller
#[async_trait]
pub trait Lookup: Send + Sync {
    /// Canonical identifier (DID) for `<handle><suffix>`, if the handle exists
    async fn resolve_identifier(&self, handle: &str) -> Option<String>;

    /// Profile attributes for a resolved identifier
    async fn fetch_profile(&self, identifier: &str) -> Option<Profile>;

    /// Accounts blocking `handle`; empty on failure or when nobody blocks it
    async fn fetch_blocklist(&self, handle: &str) -> Vec<BlocklistEntry>;
}

/// Where the lookups go and what they identify themselves as
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub resolve_url: String,
    pub profile_url: String,
    pub blocklist_url: String,
    pub handle_suffix: String,
    pub origin: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            resolve_url: net::DEFAULT_RESOLVE_URL.to_string(),
            profile_url: net::DEFAULT_PROFILE_URL.to_string(),
            blocklist_url: net::DEFAULT_BLOCKLIST_URL.to_string(),
            handle_suffix: net::DEFAULT_HANDLE_SUFFIX.to_string(),
            origin: net::DEFAULT_ORIGIN.to_string(),
        }
    }
}

/// [`Lookup`] over plain unauthenticated HTTP GETs.
///
/// No retry, no backoff and no request timeout: a hung request stays hung.
pub struct HttpLookup {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpLookup {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(static_headers(&endpoints.origin)?)
            .pool_max_idle_per_host(4)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, endpoints })
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(anyhow!("http {}", response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| anyhow!("invalid JSON: {e}"))
    }

    async fn try_resolve_identifier(&self, handle: &str) -> Result<String> {
        let full = format!("{handle}{}", self.endpoints.handle_suffix);
        let url = format!(
            "{}?handle={}",
            self.endpoints.resolve_url,
            urlencoding::encode(&full)
        );
        let body = self.get_json(&url).await?;
        parse_identifier(&body).ok_or_else(|| anyhow!("no did in response for {full}"))
    }

    async fn try_fetch_profile(&self, identifier: &str) -> Result<Profile> {
        let url = format!(
            "{}?actor={}",
            self.endpoints.profile_url,
            urlencoding::encode(identifier)
        );
        let body = self.get_json(&url).await?;
        parse_profile(body)
    }

    async fn try_fetch_blocklist(&self, handle: &str) -> Result<Vec<BlocklistEntry>> {
        let url = format!(
            "{}/{}",
            self.endpoints.blocklist_url.trim_end_matches('/'),
            urlencoding::encode(handle)
        );
        let body = self.get_json(&url).await?;
        parse_blocklist(&body)
    }
}

#[async_trait]
impl Lookup for HttpLookup {
    async fn resolve_identifier(&self, handle: &str) -> Option<String> {
        match self.try_resolve_identifier(handle).await {
            Ok(did) => {
                log::debug!("[lookup] resolved {handle} -> {did}");
                Some(did)
            }
            Err(e) => {
                log::warn!("[lookup] resolve {handle} failed: {e:#}");
                None
            }
        }
    }

    async fn fetch_profile(&self, identifier: &str) -> Option<Profile> {
        match self.try_fetch_profile(identifier).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("[lookup] profile {identifier} failed: {e:#}");
                None
            }
        }
    }

    async fn fetch_blocklist(&self, handle: &str) -> Vec<BlocklistEntry> {
        match self.try_fetch_blocklist(handle).await {
            Ok(entries) => {
                log::info!("[lookup] {} blockers for {handle}", entries.len());
                entries
            }
            Err(e) => {
                log::warn!("[lookup] blocklist {handle} failed: {e:#}");
                Vec::new()
            }
        }
    }
}

fn static_headers(origin: &str) -> Result<HeaderMap> {
    let origin = origin.trim_end_matches('/');
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(
        ORIGIN,
        HeaderValue::from_str(origin).with_context(|| format!("invalid origin {origin:?}"))?,
    );
    headers.insert(
        REFERER,
        HeaderValue::from_str(&format!("{origin}/")).context("invalid referer")?,
    );
    Ok(headers)
}

/// `did` field of a resolveHandle response
pub fn parse_identifier(body: &Value) -> Option<String> {
    body.get("did")
        .and_then(|d| d.as_str())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

pub fn parse_profile(body: Value) -> Result<Profile> {
    serde_json::from_value(body).context("profile response does not match the expected shape")
}

/// Entries under `data.blocklist`. A missing field is an empty list.
pub fn parse_blocklist(body: &Value) -> Result<Vec<BlocklistEntry>> {
    match body.pointer("/data/blocklist") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(list) => serde_json::from_value(list.clone()).context("malformed blocklist entries"),
    }
}
