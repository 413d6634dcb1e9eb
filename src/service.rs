//! Music service registry
//!
//! Composes the catalog: registered albums, users and playlists, with
//! linear-scan lookups and rating-based ranking. No uniqueness is
//! enforced anywhere; duplicate titles and usernames simply make
//! first-match lookups ambiguous.

use crate::model::{Album, Band, CustomPlaylist, User};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory registry over albums, users and playlists
#[derive(Debug, Clone, Default)]
pub struct MusicService {
    /// Registered albums, in insertion order
    albums: Vec<Album>,

    /// Registered users, in insertion order
    users: Vec<User>,

    /// Playlists keyed by their title at insertion time. Renaming a
    /// playlist afterwards does NOT re-key it here, so the index can
    /// go stale relative to the playlist's current title.
    playlists: HashMap<String, CustomPlaylist>,
}

impl MusicService {
    /// Create a new empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an album
    pub fn add_album(&mut self, album: Album) {
        self.albums.push(album);
    }

    /// Register a user
    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Store a playlist under its current title
    ///
    /// A playlist already stored under the same title is overwritten.
    pub fn add_playlist(&mut self, playlist: CustomPlaylist) {
        self.playlists.insert(playlist.title().to_string(), playlist);
    }

    /// First album with the given title, in insertion order
    ///
    /// `None` when nothing matches; never an error.
    pub fn get_album_by_title(&self, title: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.title == title)
    }

    /// Mutable variant of [`get_album_by_title`](Self::get_album_by_title),
    /// for rating an album after registration
    pub fn get_album_by_title_mut(&mut self, title: &str) -> Option<&mut Album> {
        self.albums.iter_mut().find(|album| album.title == title)
    }

    /// Playlist stored under the given title
    ///
    /// Looks up the insertion-time key, which may differ from the
    /// playlist's current title after a rename.
    pub fn get_playlist_by_title(&self, title: &str) -> Option<&CustomPlaylist> {
        self.playlists.get(title)
    }

    /// Mutable variant of
    /// [`get_playlist_by_title`](Self::get_playlist_by_title)
    ///
    /// Renaming the playlist through this handle leaves the index key
    /// unchanged.
    pub fn get_playlist_by_title_mut(&mut self, title: &str) -> Option<&mut CustomPlaylist> {
        self.playlists.get_mut(title)
    }

    /// Every registered album by the given band, in insertion order
    ///
    /// Bands are matched by reference identity, not by name.
    pub fn albums_by_band(&self, band: &Arc<Band>) -> Vec<&Album> {
        self.albums
            .iter()
            .filter(|album| Arc::ptr_eq(&album.band, band))
            .collect()
    }

    /// Albums ranked by descending average rating
    ///
    /// The sort is stable: albums with equal averages keep their
    /// relative insertion order.
    pub fn get_top_albums(&self) -> Vec<&Album> {
        let mut ranked: Vec<&Album> = self.albums.iter().collect();
        ranked.sort_by(|a, b| {
            b.calculate_average_rating()
                .total_cmp(&a.calculate_average_rating())
        });
        ranked
    }

    /// All registered albums, in insertion order
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// All registered users, in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of registered albums
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of stored playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}
