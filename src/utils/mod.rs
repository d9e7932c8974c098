//! Utility modules shared across the engine
//!
//! Normalization is the load-bearing piece: it defines the identity key that
//! the catalog, merge engine, and generator dedup all agree on.

pub mod normalization;

// Re-export commonly used functions
pub use normalization::normalize;
