//! Reqwest-based transport for the feeds API.

pub mod transport;

pub use transport::HttpTransport;
