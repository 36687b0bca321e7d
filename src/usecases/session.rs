//! Per-user session: binds (transport, user id, token) and routes feed
//! reads through the enriched endpoint.

use crate::domain::{ClientError, FeedReadOptions};
use crate::ports::{FeedFactory, FeedPort, TransportPort};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::usecases::users::UserClient;

/// Wrapper around a feed accessor whose reads go through
/// `enrich/feed/<feedUrl>/` instead of the feed's default path.
///
/// Holds the base accessor by composition; the accessor itself is left
/// untouched and its signature is reused.
pub struct EnrichedFeed {
    inner: Arc<dyn FeedPort>,
}

impl EnrichedFeed {
    pub fn new(inner: Arc<dyn FeedPort>) -> Self {
        Self { inner }
    }

    pub fn feed_url(&self) -> &str {
        self.inner.feed_url()
    }

    /// Read the feed with embedded related objects. List-valued
    /// `mark_read`/`mark_seen` options are comma-joined by the query
    /// encoding.
    pub async fn get(&self, options: &FeedReadOptions) -> Result<Value, ClientError> {
        let url = format!("enrich/feed/{}/", self.inner.feed_url());
        debug!(feed = %self.inner.feed_url(), "enriched feed read");
        self.inner
            .transport()
            .get(&url, &options.to_query(), self.inner.signature())
            .await
    }

    /// Follow relations are unaffected by enrichment; delegate.
    pub async fn follow(&self, target_group: &str, target_id: &str) -> Result<Value, ClientError> {
        self.inner.follow(target_group, target_id).await
    }
}

/// A user session: immutable (client, user id, token) triple with
/// identity-scoped accessors. Safe to share across concurrent calls.
pub struct UserSession {
    transport: Arc<dyn TransportPort>,
    feeds: Arc<dyn FeedFactory>,
    user_id: String,
    token: String,
    user: UserClient,
}

impl UserSession {
    pub fn new(
        transport: Arc<dyn TransportPort>,
        feeds: Arc<dyn FeedFactory>,
        user_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        let token = token.into();
        let user = UserClient::new(Arc::clone(&transport), user_id.clone(), token.clone());
        Self {
            transport,
            feeds,
            user_id,
            token,
            user,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The accessor for this session's own user, constructed at session
    /// creation.
    pub fn user(&self) -> &UserClient {
        &self.user
    }

    /// A fresh enriched accessor for `group`, scoped to this session's
    /// identity. Accessors are not cached across calls.
    pub fn feed(&self, group: &str) -> EnrichedFeed {
        EnrichedFeed::new(self.feeds.feed(group, &self.user_id, &self.token))
    }

    /// Follow `user_id`'s user feed from this session's timeline.
    pub async fn follow_user(&self, user_id: &str) -> Result<Value, ClientError> {
        self.feed("timeline").follow("user", user_id).await
    }

    /// Accessor for an arbitrary user, reusing this session's token.
    pub fn get_user(&self, user_id: &str) -> UserClient {
        UserClient::new(Arc::clone(&self.transport), user_id, self.token.clone())
    }
}
