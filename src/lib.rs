//! feedkit: client library for a hosted activity-feed/reaction service.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
