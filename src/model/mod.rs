//! Unified data model for the music catalog
//!
//! Plain in-memory types: bands and tracks are immutable values shared
//! via `Arc`, albums and playlists own ordered track lists through the
//! [`MusicContent`] capability.

mod album;
mod band;
mod content;
mod playlist;
mod track;
mod user;

pub use album::Album;
pub use band::Band;
pub use content::MusicContent;
pub use playlist::{merge_playlists, Comment, CustomPlaylist, Interactions, Playlist};
pub use track::Track;
pub use user::User;
