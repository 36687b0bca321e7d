//! Port traits. API boundaries for the hexagon.
//!
//! Outbound: called by use cases into transport infrastructure.

pub mod outbound;

pub use outbound::{FeedFactory, FeedPort, TransportPort};
