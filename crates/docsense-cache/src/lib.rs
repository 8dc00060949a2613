//! Memoization cache for suggestion results.
//!
//! Keyed by a short token derived from the normalized call inputs; entries
//! are evicted by capacity (oldest first) and TTL, so a long-lived process
//! never grows the cache without bound.

pub mod key;
pub mod store;

pub use key::cache_key;
pub use store::SuggestionCache;
