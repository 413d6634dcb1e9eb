use super::{Album, Band, MusicContent};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single track
///
/// Immutable after construction. Identity is reference identity
/// (`Arc::ptr_eq`), never the name: two distinct tracks may share a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub name: String,

    /// Duration in minutes
    pub length: f64,

    /// The band that recorded this track
    pub band: Arc<Band>,
}

impl Track {
    /// Create a new track, ready for sharing between albums and playlists
    pub fn new(name: impl Into<String>, length: f64, band: Arc<Band>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            length,
            band,
        })
    }

    /// Find every track with the given name across the given albums
    ///
    /// Exact string match. Results come back in album order, then in-album
    /// insertion order. An empty result is not an error.
    pub fn search_by_name(name: &str, albums: &[Album]) -> Vec<Arc<Track>> {
        let mut found = Vec::new();
        for album in albums {
            for track in album.track_list() {
                if track.name == name {
                    found.push(Arc::clone(track));
                }
            }
        }
        found
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({} min)", self.name, self.band.name, self.length)
    }
}
