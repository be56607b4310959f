//! Data access layer for the hosted Supabase store.
//!
//! All queries go through PostgREST at `<SUPABASE_URL>/rest/v1/`, scoped to
//! the lab's logical schema via profile headers. The store is treated as an
//! opaque, already-durable external resource: one remote call per operation,
//! no caching, no retries, no transactions of our own.

pub mod agents;
pub mod tasks;

use crate::config::Settings;
use crate::error::StoreError;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use secrecy::{ExposeSecret, SecretString};

/// Logical schema all queries are scoped to.
pub const SCHEMA: &str = "ai_agent_lab";

/// Client handle for the hosted store.
///
/// Constructed once at startup and shared by reference; reqwest's client is
/// internally pooled and safe for concurrent use.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base: Url,
    key: SecretString,
}

impl SupabaseStore {
    /// Build a store client from validated settings.
    pub fn new(settings: &Settings) -> Result<Self, StoreError> {
        let base = Url::parse(&settings.supabase_url)
            .and_then(|url| url.join("rest/v1/"))
            .map_err(|e| StoreError::InvalidEndpoint(e.to_string()))?;

        Ok(Self {
            client: Client::new(),
            base,
            key: settings.service_role_key.clone(),
        })
    }

    /// Start a request against a table, with auth and schema headers set.
    ///
    /// PostgREST selects the schema via `Accept-Profile` on reads and
    /// `Content-Profile` on writes.
    fn request(&self, method: Method, table: &str) -> Result<RequestBuilder, StoreError> {
        let url = self
            .base
            .join(table)
            .map_err(|e| StoreError::InvalidEndpoint(e.to_string()))?;

        let profile = if method == Method::GET || method == Method::HEAD {
            "Accept-Profile"
        } else {
            "Content-Profile"
        };

        Ok(self
            .client
            .request(method, url)
            .header("apikey", self.key.expose_secret())
            .bearer_auth(self.key.expose_secret())
            .header(profile, SCHEMA))
    }

    /// Send a request, mapping any non-success status to `StoreError::Api`.
    async fn send(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let res = req.send().await?;
        let status = res.status();
        if status.is_success() {
            Ok(res)
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(StoreError::Api { status, body })
        }
    }
}
