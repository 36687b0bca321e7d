//! Application use cases. Request shaping for the feeds API via ports.

pub mod feeds;
pub mod reactions;
pub mod session;
pub mod users;

pub use feeds::{FeedRegistry, RemoteFeed};
pub use reactions::{
    ChildReactionOptions, ReactionClient, ReactionOptions, UpdateReactionOptions,
};
pub use session::{EnrichedFeed, UserSession};
pub use users::UserClient;
