//! Outgoing request bodies and query options.
//!
//! Optional body fields are explicit `Option`s serialized conditionally;
//! nothing patches a JSON map after construction.

use crate::domain::ClientError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Default page size for reaction lookups when the caller sets none.
pub const DEFAULT_LOOKUP_LIMIT: u32 = 10;

/// Body for creating a reaction on an activity.
#[derive(Debug, Clone, Serialize)]
pub struct NewReaction {
    /// Caller-assigned identifier for idempotent creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: String,
    pub activity_id: String,
    pub data: Map<String, Value>,
    pub target_feeds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Included only when supplied; `Some(empty)` still goes on the wire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_feeds_extra_data: Option<Map<String, Value>>,
}

/// Body for creating a reaction on another reaction.
#[derive(Debug, Clone, Serialize)]
pub struct NewChildReaction {
    pub kind: String,
    pub parent: String,
    pub data: Map<String, Value>,
    pub target_feeds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_feeds_extra_data: Option<Map<String, Value>>,
}

/// Body for updating a reaction. Fields not sent again are removed by the
/// service, so `target_feeds` is always present.
#[derive(Debug, Clone, Serialize)]
pub struct ReactionUpdate {
    pub data: Map<String, Value>,
    pub target_feeds: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_feeds_extra_data: Option<Map<String, Value>>,
}

/// Query options for reading the reaction collection root.
#[derive(Debug, Clone, Default)]
pub struct ReactionQuery {
    pub limit: Option<u32>,
}

impl ReactionQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut qs = Vec::new();
        if let Some(limit) = self.limit {
            qs.push(("limit".to_string(), limit.to_string()));
        }
        qs
    }
}

/// Lookup conditions for `ReactionClient::filter`.
///
/// Exactly one of `user_id`, `activity_id`, `reaction_id` must be set.
/// Pagination follows reaction IDs: `id_lt`/`id_lte` page newest to oldest,
/// `id_gt`/`id_gte` oldest to newest.
#[derive(Debug, Clone, Default)]
pub struct ReactionFilter {
    pub user_id: Option<String>,
    pub activity_id: Option<String>,
    pub reaction_id: Option<String>,
    /// Reaction category to narrow the lookup. Travels in the URL path.
    pub kind: Option<String>,
    pub id_lt: Option<String>,
    pub id_lte: Option<String>,
    pub id_gt: Option<String>,
    pub id_gte: Option<String>,
    pub limit: Option<u32>,
}

impl ReactionFilter {
    /// Resolve the lookup path segments. Fails when zero or several of the
    /// three identifier keys are set.
    pub fn lookup(&self) -> Result<(&'static str, &str), ClientError> {
        let candidates = [
            ("user_id", self.user_id.as_deref()),
            ("activity_id", self.activity_id.as_deref()),
            ("reaction_id", self.reaction_id.as_deref()),
        ];
        let mut provided = candidates
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)));

        match (provided.next(), provided.next()) {
            (Some(hit), None) => Ok(hit),
            _ => Err(ClientError::Validation(
                "must provide exactly one value for one of these params: \
                 user_id, activity_id, reaction_id"
                    .to_string(),
            )),
        }
    }

    /// Pagination query parameters, with `limit` defaulted.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut qs = Vec::new();
        if let Some(ref id_lt) = self.id_lt {
            qs.push(("id_lt".to_string(), id_lt.clone()));
        }
        if let Some(ref id_lte) = self.id_lte {
            qs.push(("id_lte".to_string(), id_lte.clone()));
        }
        if let Some(ref id_gt) = self.id_gt {
            qs.push(("id_gt".to_string(), id_gt.clone()));
        }
        if let Some(ref id_gte) = self.id_gte {
            qs.push(("id_gte".to_string(), id_gte.clone()));
        }
        let limit = self.limit.unwrap_or(DEFAULT_LOOKUP_LIMIT);
        qs.push(("limit".to_string(), limit.to_string()));
        qs
    }
}

/// `mark_read`/`mark_seen` argument: everything, or specific groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Flag(bool),
    Ids(Vec<String>),
}

impl Mark {
    /// Wire encoding: the transport expects a scalar, so id lists are
    /// comma-joined.
    pub fn to_param(&self) -> String {
        match self {
            Mark::Flag(flag) => flag.to_string(),
            Mark::Ids(ids) => ids.join(","),
        }
    }
}

/// Options for feed reads.
#[derive(Debug, Clone, Default)]
pub struct FeedReadOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub id_lt: Option<String>,
    pub id_gt: Option<String>,
    pub mark_read: Option<Mark>,
    pub mark_seen: Option<Mark>,
}

impl FeedReadOptions {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut qs = Vec::new();
        if let Some(limit) = self.limit {
            qs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            qs.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(ref id_lt) = self.id_lt {
            qs.push(("id_lt".to_string(), id_lt.clone()));
        }
        if let Some(ref id_gt) = self.id_gt {
            qs.push(("id_gt".to_string(), id_gt.clone()));
        }
        if let Some(ref mark) = self.mark_read {
            qs.push(("mark_read".to_string(), mark.to_param()));
        }
        if let Some(ref mark) = self.mark_seen {
            qs.push(("mark_seen".to_string(), mark.to_param()));
        }
        qs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_reaction_omits_absent_optionals() {
        let body = serde_json::to_value(NewReaction {
            id: None,
            kind: "like".to_string(),
            activity_id: "0c7db91c".to_string(),
            data: Map::new(),
            target_feeds: vec![],
            user_id: None,
            target_feeds_extra_data: None,
        })
        .unwrap();

        let obj = body.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("user_id"));
        assert!(!obj.contains_key("target_feeds_extra_data"));
        // Always-present fields stay, even when empty.
        assert_eq!(body["data"], json!({}));
        assert_eq!(body["target_feeds"], json!([]));
    }

    #[test]
    fn test_new_reaction_keeps_empty_extra_data() {
        let body = serde_json::to_value(NewReaction {
            id: Some("pre-assigned".to_string()),
            kind: "like".to_string(),
            activity_id: "0c7db91c".to_string(),
            data: Map::new(),
            target_feeds: vec![],
            user_id: Some("alice".to_string()),
            target_feeds_extra_data: Some(Map::new()),
        })
        .unwrap();

        assert_eq!(body["id"], json!("pre-assigned"));
        assert_eq!(body["user_id"], json!("alice"));
        // Empty is not omission.
        assert_eq!(body["target_feeds_extra_data"], json!({}));
    }

    #[test]
    fn test_filter_lookup_requires_exactly_one_key() {
        let none = ReactionFilter::default();
        assert!(none.lookup().unwrap_err().is_validation());

        let both = ReactionFilter {
            user_id: Some("u1".to_string()),
            activity_id: Some("a1".to_string()),
            ..Default::default()
        };
        assert!(both.lookup().unwrap_err().is_validation());

        let one = ReactionFilter {
            reaction_id: Some("r1".to_string()),
            ..Default::default()
        };
        assert_eq!(one.lookup().unwrap(), ("reaction_id", "r1"));
    }

    #[test]
    fn test_filter_query_defaults_limit() {
        let filter = ReactionFilter {
            user_id: Some("u1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![("limit".to_string(), "10".to_string())]
        );

        let paged = ReactionFilter {
            activity_id: Some("a1".to_string()),
            id_lt: Some("67b3e3b5".to_string()),
            limit: Some(25),
            ..Default::default()
        };
        assert_eq!(
            paged.to_query(),
            vec![
                ("id_lt".to_string(), "67b3e3b5".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_mark_encoding() {
        assert_eq!(Mark::Flag(true).to_param(), "true");
        assert_eq!(
            Mark::Ids(vec!["a".to_string(), "b".to_string()]).to_param(),
            "a,b"
        );
    }

    #[test]
    fn test_feed_read_options_query() {
        let options = FeedReadOptions {
            limit: Some(20),
            mark_seen: Some(Mark::Ids(vec!["g1".to_string(), "g2".to_string()])),
            ..Default::default()
        };
        assert_eq!(
            options.to_query(),
            vec![
                ("limit".to_string(), "20".to_string()),
                ("mark_seen".to_string(), "g1,g2".to_string()),
            ]
        );
    }
}
