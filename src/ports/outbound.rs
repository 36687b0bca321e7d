//! Outbound ports. Use cases call into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ClientError, FeedReadOptions};
use serde_json::Value;
use std::sync::Arc;

/// Signed HTTP transport to the feeds API. Each call resolves to the parsed
/// response body or a structured error; the transport owns timeouts and
/// connection handling.
#[async_trait::async_trait]
pub trait TransportPort: Send + Sync {
    /// GET `url` with the given query parameters.
    async fn get(
        &self,
        url: &str,
        qs: &[(String, String)],
        signature: &str,
    ) -> Result<Value, ClientError>;

    /// POST `body` to `url`.
    async fn post(&self, url: &str, body: Value, signature: &str) -> Result<Value, ClientError>;

    /// PUT `body` to `url`.
    async fn put(&self, url: &str, body: Value, signature: &str) -> Result<Value, ClientError>;

    /// DELETE `url`. Success responses may carry an empty body.
    async fn delete(&self, url: &str, signature: &str) -> Result<Value, ClientError>;
}

/// A feed accessor scoped to one (group, user, token) triple.
#[async_trait::async_trait]
pub trait FeedPort: Send + Sync {
    /// Opaque path fragment identifying this feed, e.g. `timeline/alice`.
    fn feed_url(&self) -> &str;

    /// Signature attached to this feed's requests.
    fn signature(&self) -> &str;

    /// Transport back-reference, for wrappers that reroute reads.
    fn transport(&self) -> Arc<dyn TransportPort>;

    /// Read the feed.
    async fn get(&self, options: &FeedReadOptions) -> Result<Value, ClientError>;

    /// Create a follow relation from this feed to `target_group:target_id`.
    async fn follow(&self, target_group: &str, target_id: &str) -> Result<Value, ClientError>;
}

/// Constructs feed accessors scoped to an identity.
pub trait FeedFactory: Send + Sync {
    fn feed(&self, group: &str, user_id: &str, token: &str) -> Arc<dyn FeedPort>;
}
