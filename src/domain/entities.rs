//! Domain entities. Pure data structures for the feeds API.
//!
//! Response views keep unknown service fields in `extra`; nothing here is
//! mutated after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A reaction attached to an activity or to another reaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
    /// Set when this is a child reaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An event record stored in one or more feeds. Enriched reads may embed
/// full objects in `actor`/`object`, so those stay as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of reactions as returned by the collection and lookup endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReactionPage {
    #[serde(default)]
    pub results: Vec<Reaction>,
    /// Opaque cursor for the next page, when the service provides one.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fully-qualified feed identity, rendered as `group:user_id` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedId {
    pub group: String,
    pub user_id: String,
}

impl FeedId {
    pub fn new(group: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            user_id: user_id.into(),
        }
    }
}

impl fmt::Display for FeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.user_id)
    }
}

/// Activity argument for reaction creation: a bare identifier or a full
/// activity whose `id` is used.
#[derive(Debug, Clone)]
pub enum ActivityRef {
    Id(String),
    Activity(Activity),
}

impl ActivityRef {
    pub fn activity_id(&self) -> &str {
        match self {
            ActivityRef::Id(id) => id,
            ActivityRef::Activity(activity) => &activity.id,
        }
    }
}

impl From<&str> for ActivityRef {
    fn from(id: &str) -> Self {
        ActivityRef::Id(id.to_string())
    }
}

impl From<String> for ActivityRef {
    fn from(id: String) -> Self {
        ActivityRef::Id(id)
    }
}

impl From<&Activity> for ActivityRef {
    fn from(activity: &Activity) -> Self {
        ActivityRef::Activity(activity.clone())
    }
}

impl From<Activity> for ActivityRef {
    fn from(activity: Activity) -> Self {
        ActivityRef::Activity(activity)
    }
}

/// Parent argument for child reactions: a bare identifier or an existing
/// reaction whose `id` is used.
#[derive(Debug, Clone)]
pub enum ReactionRef {
    Id(String),
    Reaction(Reaction),
}

impl ReactionRef {
    pub fn reaction_id(&self) -> &str {
        match self {
            ReactionRef::Id(id) => id,
            ReactionRef::Reaction(reaction) => &reaction.id,
        }
    }
}

impl From<&str> for ReactionRef {
    fn from(id: &str) -> Self {
        ReactionRef::Id(id.to_string())
    }
}

impl From<String> for ReactionRef {
    fn from(id: String) -> Self {
        ReactionRef::Id(id)
    }
}

impl From<&Reaction> for ReactionRef {
    fn from(reaction: &Reaction) -> Self {
        ReactionRef::Reaction(reaction.clone())
    }
}

impl From<Reaction> for ReactionRef {
    fn from(reaction: Reaction) -> Self {
        ReactionRef::Reaction(reaction)
    }
}

/// Target feed element: an already-qualified identifier or a structured
/// feed identity. Normalized to strings in outgoing payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRef {
    Id(String),
    Feed(FeedId),
}

impl FeedRef {
    /// Feed identifier as sent on the wire.
    pub fn id(&self) -> String {
        match self {
            FeedRef::Id(id) => id.clone(),
            FeedRef::Feed(feed) => feed.to_string(),
        }
    }
}

impl From<&str> for FeedRef {
    fn from(id: &str) -> Self {
        FeedRef::Id(id.to_string())
    }
}

impl From<String> for FeedRef {
    fn from(id: String) -> Self {
        FeedRef::Id(id)
    }
}

impl From<FeedId> for FeedRef {
    fn from(feed: FeedId) -> Self {
        FeedRef::Feed(feed)
    }
}
