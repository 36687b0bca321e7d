//! Infrastructure adapters. Implement outbound ports.
//!
//! HTTP transport and a recording mock. Map errors to ClientError.

pub mod http;
pub mod mock;
