//! Request middleware.
//!
//! - [`latency`]: artificial delay before every handler

pub mod latency;

pub use latency::artificial_latency;
