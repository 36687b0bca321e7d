//! Core domain layer. No external I/O dependencies.
//!
//! Request/response shapes and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod requests;

pub use entities::{Activity, ActivityRef, FeedId, FeedRef, Reaction, ReactionPage, ReactionRef};
pub use errors::ClientError;
pub use requests::{
    FeedReadOptions, Mark, NewChildReaction, NewReaction, ReactionFilter, ReactionQuery,
    ReactionUpdate,
};
