//! Feed accessors: per-feed reads and follow relations over the transport.

use crate::domain::{ClientError, FeedReadOptions};
use crate::ports::{FeedFactory, FeedPort, TransportPort};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Default feed accessor scoped to one (group, user, token) triple.
pub struct RemoteFeed {
    transport: Arc<dyn TransportPort>,
    feed_url: String,
    signature: String,
}

impl RemoteFeed {
    pub fn new(
        transport: Arc<dyn TransportPort>,
        group: &str,
        user_id: &str,
        token: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            feed_url: format!("{}/{}", group, user_id),
            signature: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl FeedPort for RemoteFeed {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn signature(&self) -> &str {
        &self.signature
    }

    fn transport(&self) -> Arc<dyn TransportPort> {
        Arc::clone(&self.transport)
    }

    async fn get(&self, options: &FeedReadOptions) -> Result<Value, ClientError> {
        debug!(feed = %self.feed_url, "reading feed");
        self.transport
            .get(
                &format!("feed/{}/", self.feed_url),
                &options.to_query(),
                &self.signature,
            )
            .await
    }

    async fn follow(&self, target_group: &str, target_id: &str) -> Result<Value, ClientError> {
        debug!(feed = %self.feed_url, target_group, target_id, "creating follow relation");
        self.transport
            .post(
                &format!("feed/{}/following/", self.feed_url),
                json!({ "target": format!("{}:{}", target_group, target_id) }),
                &self.signature,
            )
            .await
    }
}

/// Constructs [`RemoteFeed`] accessors bound to a shared transport.
pub struct FeedRegistry {
    transport: Arc<dyn TransportPort>,
}

impl FeedRegistry {
    pub fn new(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }
}

impl FeedFactory for FeedRegistry {
    fn feed(&self, group: &str, user_id: &str, token: &str) -> Arc<dyn FeedPort> {
        Arc::new(RemoteFeed::new(
            Arc::clone(&self.transport),
            group,
            user_id,
            token,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockTransport;
    use crate::domain::Mark;
    use serde_json::json;

    #[tokio::test]
    async fn test_feed_get_url_and_query() {
        let mock = Arc::new(MockTransport::new());
        let feed = RemoteFeed::new(
            Arc::clone(&mock) as Arc<dyn TransportPort>,
            "user",
            "alice",
            "token-a",
        );

        feed.get(&FeedReadOptions {
            limit: Some(20),
            ..Default::default()
        })
        .await
        .unwrap();

        let request = mock.last_request().await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "feed/user/alice/");
        assert_eq!(request.qs, vec![("limit".to_string(), "20".to_string())]);
        assert_eq!(request.signature, "token-a");
    }

    #[tokio::test]
    async fn test_feed_get_joins_marks() {
        let mock = Arc::new(MockTransport::new());
        let feed = RemoteFeed::new(
            Arc::clone(&mock) as Arc<dyn TransportPort>,
            "notification",
            "alice",
            "token-a",
        );

        feed.get(&FeedReadOptions {
            mark_read: Some(Mark::Ids(vec!["a".to_string(), "b".to_string()])),
            ..Default::default()
        })
        .await
        .unwrap();

        let request = mock.last_request().await.unwrap();
        assert_eq!(request.qs, vec![("mark_read".to_string(), "a,b".to_string())]);
    }

    #[tokio::test]
    async fn test_follow_posts_target() {
        let mock = Arc::new(MockTransport::new());
        let feed = RemoteFeed::new(
            Arc::clone(&mock) as Arc<dyn TransportPort>,
            "timeline",
            "alice",
            "token-a",
        );

        feed.follow("user", "bob").await.unwrap();

        let request = mock.last_request().await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "feed/timeline/alice/following/");
        assert_eq!(request.body.unwrap(), json!({"target": "user:bob"}));
    }

    #[tokio::test]
    async fn test_registry_scopes_accessors() {
        let mock = Arc::new(MockTransport::new());
        let registry = FeedRegistry::new(Arc::clone(&mock) as Arc<dyn TransportPort>);

        let feed = registry.feed("timeline", "bob", "token-b");
        assert_eq!(feed.feed_url(), "timeline/bob");
        assert_eq!(feed.signature(), "token-b");
    }
}
