//! Background Tasks Module
//!
//! Tasks that run periodically for the lifetime of the cache engine.
//!
//! # Tasks
//! - Expiration sweeper: removes stale cache entries at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper;
