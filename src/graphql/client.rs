use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::Duration;

use lru::LruCache;
use tracing::{debug, warn};

use super::error::QueryError;
use super::request::GraphqlRequest;
use super::response::{GraphqlResponse, parse_body};
use crate::state::QueryResult;
use crate::theme::Settings;

/// How a query consults the response cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Serve a cached response for the same query+variables; fetch only on a miss.
    #[default]
    CacheFirst,
    /// Always hit the network, then refresh the cache entry.
    NetworkOnly,
}

/// Connection settings for [`QueryClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// GraphQL endpoint; every query targets it.
    pub endpoint: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Maximum cached responses.
    pub cache_capacity: usize,
}

impl ClientConfig {
    /// Config with default timeouts and cache size for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let defaults = Settings::default();
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(defaults.request_timeout_secs),
            connect_timeout: Duration::from_secs(defaults.connect_timeout_secs),
            cache_capacity: defaults.cache_capacity,
        }
    }

    /// Config derived from user settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            timeout: Duration::from_secs(settings.request_timeout_secs),
            connect_timeout: Duration::from_secs(settings.connect_timeout_secs),
            cache_capacity: settings.cache_capacity,
        }
    }
}

/// What: Check whether an endpoint points at this machine.
///
/// Details:
/// - Loopback endpoints (a local graph node) bypass any configured HTTP proxy.
fn is_loopback_endpoint(endpoint: &str) -> bool {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]" || h == "::1")
}

/// GraphQL transport plus in-memory response cache.
///
/// Built once at startup and shared by reference (`Arc`) with every query
/// task. The cache lock is never held across an `.await`.
pub struct QueryClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Target URI.
    endpoint: String,
    /// Responses keyed by query text + variables.
    cache: Mutex<LruCache<String, QueryResult>>,
}

impl QueryClient {
    /// What: Build the HTTP client and an empty cache.
    ///
    /// # Errors
    /// - `QueryError::Config` when the endpoint is not a valid URL or the
    ///   HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, QueryError> {
        reqwest::Url::parse(&config.endpoint).map_err(|e| {
            QueryError::Config(format!("Invalid endpoint '{}': {e}", config.endpoint))
        })?;
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(format!("tokentrackr/{}", env!("CARGO_PKG_VERSION")));
        if is_loopback_endpoint(&config.endpoint) {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| QueryError::Config(format!("Failed to create HTTP client: {e}")))?;
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(NonZeroUsize::MIN);
        Ok(Self {
            http,
            endpoint: config.endpoint,
            cache: Mutex::new(LruCache::new(capacity)),
        })
    }

    /// Configured endpoint URI.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Cached response for `request`, if any.
    #[must_use]
    pub fn cached(&self, request: &GraphqlRequest) -> Option<QueryResult> {
        self.lookup(&request.cache_key())
    }

    /// Number of cached responses.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.lock().map_or(0, |c| c.len())
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        if let Ok(mut c) = self.cache.lock() {
            c.clear();
        }
    }

    /// Cache read by key.
    fn lookup(&self, key: &str) -> Option<QueryResult> {
        self.cache.lock().ok().and_then(|mut c| c.get(key).cloned())
    }

    /// Cache write by key.
    fn store(&self, key: String, result: QueryResult) {
        match self.cache.lock() {
            Ok(mut c) => {
                c.put(key, result);
            }
            Err(_) => warn!("[Query] response cache lock poisoned; result not cached"),
        }
    }

    /// What: Execute one query against the endpoint.
    ///
    /// Inputs:
    /// - `request`: Document, variables and operation name
    /// - `policy`: Whether a cached response may be served
    ///
    /// Output:
    /// - Decoded transfer events, or the classified failure.
    ///
    /// # Errors
    /// - `Transport` when no response arrived, `Http` on non-success status,
    ///   `Graphql` when the server reported errors, `Decode` on malformed bodies.
    ///
    /// Details:
    /// - Only successful results are cached; failures are returned as-is so
    ///   the next trigger goes back to the network.
    /// - A non-success status whose body still carries a GraphQL `errors`
    ///   array (validation failures) reports those messages instead of the status.
    pub async fn execute(
        &self,
        request: &GraphqlRequest,
        policy: FetchPolicy,
    ) -> Result<QueryResult, QueryError> {
        let key = request.cache_key();
        if policy == FetchPolicy::CacheFirst
            && let Some(hit) = self.lookup(&key)
        {
            debug!(
                operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
                rows = hit.transfer_events.len(),
                "[Query] cache hit"
            );
            return Ok(hit);
        }

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(
            operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
            status = status.as_u16(),
            bytes = body.len(),
            "[Query] response received"
        );

        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_str::<GraphqlResponse>(&body)
                && let Some(errors) = envelope.errors
                && !errors.is_empty()
            {
                return Err(QueryError::Graphql(
                    errors.into_iter().map(|e| e.message).collect(),
                ));
            }
            return Err(QueryError::http(status.as_u16(), &body));
        }

        let result = parse_body(&body)?;
        self.store(key, result.clone());
        Ok(result)
    }
}
