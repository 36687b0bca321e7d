//! Reaction endpoint wrapper: signed CRUD and lookups for reactions.
//!
//! Builds URLs and payloads, validates lookup conditions, delegates
//! execution to the transport port. Responses are surfaced as returned.

use crate::domain::{
    ActivityRef, ClientError, FeedRef, NewChildReaction, NewReaction, Reaction, ReactionFilter,
    ReactionPage, ReactionQuery, ReactionRef, ReactionUpdate,
};
use crate::ports::TransportPort;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Optional parameters for [`ReactionClient::add`].
#[derive(Debug, Clone, Default)]
pub struct ReactionOptions {
    /// Pre-assign the reaction identifier (idempotent creation).
    pub id: Option<String>,
    /// Feeds the reaction activity is posted to.
    pub target_feeds: Vec<FeedRef>,
    /// Act as this user instead of the token's subject.
    pub user_id: Option<String>,
    pub target_feeds_extra_data: Option<Map<String, Value>>,
}

/// Optional parameters for [`ReactionClient::add_child`].
#[derive(Debug, Clone, Default)]
pub struct ChildReactionOptions {
    pub target_feeds: Vec<FeedRef>,
    pub user_id: Option<String>,
    pub target_feeds_extra_data: Option<Map<String, Value>>,
}

/// Optional parameters for [`ReactionClient::update`].
///
/// Target feeds not sent again are removed by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateReactionOptions {
    pub target_feeds: Vec<FeedRef>,
    pub target_feeds_extra_data: Option<Map<String, Value>>,
}

/// Client for the reaction sub-resource of the feeds API.
///
/// The signature is fixed at construction (derived from the auth token)
/// and attached identically to every outgoing request.
pub struct ReactionClient {
    transport: Arc<dyn TransportPort>,
    signature: String,
}

impl ReactionClient {
    pub fn new(transport: Arc<dyn TransportPort>, token: impl Into<String>) -> Self {
        Self {
            transport,
            signature: token.into(),
        }
    }

    /// `reaction` + segments, `/`-joined, trailing slash. The service
    /// routes on the trailing slash.
    fn build_url(segments: &[&str]) -> String {
        let mut url = String::from("reaction");
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url.push('/');
        url
    }

    fn convert_target_feeds(feeds: &[FeedRef]) -> Vec<String> {
        feeds.iter().map(FeedRef::id).collect()
    }

    async fn post_body<B: Serialize>(&self, url: &str, body: &B) -> Result<Value, ClientError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ClientError::Serde(format!("encode request body: {}", e)))?;
        self.transport.post(url, body, &self.signature).await
    }

    /// List the reaction collection root. No validation.
    pub async fn all(&self, options: &ReactionQuery) -> Result<ReactionPage, ClientError> {
        let response = self
            .transport
            .get(&Self::build_url(&[]), &options.to_query(), &self.signature)
            .await?;
        decode(response)
    }

    /// Create a reaction on an activity.
    ///
    /// `activity` is a bare identifier or a full activity (its `id` is used).
    pub async fn add(
        &self,
        kind: &str,
        activity: impl Into<ActivityRef>,
        data: Map<String, Value>,
        options: ReactionOptions,
    ) -> Result<Reaction, ClientError> {
        let activity = activity.into();
        debug!(kind, activity_id = activity.activity_id(), "adding reaction");
        let body = NewReaction {
            id: options.id,
            kind: kind.to_string(),
            activity_id: activity.activity_id().to_string(),
            data,
            target_feeds: Self::convert_target_feeds(&options.target_feeds),
            user_id: options.user_id,
            target_feeds_extra_data: options.target_feeds_extra_data,
        };
        let response = self.post_body(&Self::build_url(&[]), &body).await?;
        decode(response)
    }

    /// Create a reaction on another reaction.
    ///
    /// `reaction` is a bare identifier or an existing reaction (its `id`
    /// becomes the `parent`).
    pub async fn add_child(
        &self,
        kind: &str,
        reaction: impl Into<ReactionRef>,
        data: Map<String, Value>,
        options: ChildReactionOptions,
    ) -> Result<Reaction, ClientError> {
        let parent = reaction.into();
        debug!(kind, parent = parent.reaction_id(), "adding child reaction");
        let body = NewChildReaction {
            kind: kind.to_string(),
            parent: parent.reaction_id().to_string(),
            data,
            target_feeds: Self::convert_target_feeds(&options.target_feeds),
            user_id: options.user_id,
            target_feeds_extra_data: options.target_feeds_extra_data,
        };
        let response = self.post_body(&Self::build_url(&[]), &body).await?;
        decode(response)
    }

    /// Fetch a single reaction by identifier.
    pub async fn get(&self, id: &str) -> Result<Reaction, ClientError> {
        let response = self
            .transport
            .get(&Self::build_url(&[id]), &[], &self.signature)
            .await?;
        decode(response)
    }

    /// Look up reactions by exactly one of `user_id`, `activity_id`,
    /// `reaction_id`, optionally narrowed by `kind`.
    ///
    /// Violating the exactly-one rule fails with a validation error before
    /// any request is sent.
    pub async fn filter(&self, filter: &ReactionFilter) -> Result<ReactionPage, ClientError> {
        let (lookup_type, value) = filter.lookup()?;
        let url = match filter.kind.as_deref() {
            Some(kind) => Self::build_url(&[lookup_type, value, kind]),
            None => Self::build_url(&[lookup_type, value]),
        };
        debug!(lookup_type, value, "filtering reactions");
        let response = self
            .transport
            .get(&url, &filter.to_query(), &self.signature)
            .await?;
        decode(response)
    }

    /// Replace a reaction's data and target feeds.
    pub async fn update(
        &self,
        id: &str,
        data: Map<String, Value>,
        options: UpdateReactionOptions,
    ) -> Result<Reaction, ClientError> {
        debug!(id, "updating reaction");
        let body = ReactionUpdate {
            data,
            target_feeds: Self::convert_target_feeds(&options.target_feeds),
            target_feeds_extra_data: options.target_feeds_extra_data,
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| ClientError::Serde(format!("encode request body: {}", e)))?;
        let response = self
            .transport
            .put(&Self::build_url(&[id]), body, &self.signature)
            .await?;
        decode(response)
    }

    /// Delete a reaction. The service answers with an empty body, surfaced
    /// unchanged.
    pub async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        debug!(id, "deleting reaction");
        self.transport
            .delete(&Self::build_url(&[id]), &self.signature)
            .await
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Serde(format!("decode response: {}", e)))
}
