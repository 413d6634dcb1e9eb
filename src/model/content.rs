//! Shared track-list capability for albums and playlists

use super::Track;
use std::sync::Arc;

/// Anything that holds an ordered collection of tracks.
///
/// Insertion order is preserved and duplicate references are allowed.
/// The track list is read-mostly: `track_list` hands out the live
/// sequence, not a defensive copy.
pub trait MusicContent {
    /// The ordered track list
    fn track_list(&self) -> &[Arc<Track>];

    /// Mutable access for the default `add_track`
    fn track_list_mut(&mut self) -> &mut Vec<Arc<Track>>;

    /// Append a track to the end of the list
    fn add_track(&mut self, track: Arc<Track>) {
        self.track_list_mut().push(track);
    }

    /// Number of tracks
    fn track_count(&self) -> usize {
        self.track_list().len()
    }

    /// Check if the track list is empty
    fn is_empty(&self) -> bool {
        self.track_list().is_empty()
    }
}
