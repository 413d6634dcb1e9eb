//! Catalog error types

use thiserror::Error;

/// Errors surfaced by catalog operations.
///
/// Lookups that can legitimately find nothing (`get_album_by_title`,
/// `get_playlist_by_title`) return `Option` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Rating outside the accepted [1, 5] range. The rating is not
    /// recorded anywhere when this is returned.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    /// The track is not in the playlist (matched by reference identity,
    /// not by name).
    #[error("track \"{0}\" not found in playlist")]
    TrackNotInPlaylist(String),
}
