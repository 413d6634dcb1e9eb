//! Jukebox - an in-memory music catalog
//!
//! Models bands, tracks, albums with ratings, playlists with social
//! interactions (tags, comments, likes), users, and a service registry
//! that indexes albums and ranks them by average rating. Everything
//! lives in process memory; there is no persistence and no concurrency.

pub mod error;
pub mod model;
pub mod service;

pub use error::CatalogError;
pub use service::MusicService;
