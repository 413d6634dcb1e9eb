use super::{MusicContent, Track, User};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// A plain playlist: a renamable title over an ordered track list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist title (mutable, see `set_title`)
    title: String,

    /// Ordered track list (duplicates allowed)
    tracks: Vec<Arc<Track>>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tracks: Vec::new(),
        }
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title. No validation, and no re-keying of any
    /// registry the playlist was added to under its old title.
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        self.title = new_title.into();
    }

    /// Remove the first occurrence of the given track
    ///
    /// Matches by reference identity (`Arc::ptr_eq`), never by name.
    /// If the same track was added twice, only one occurrence goes.
    pub fn remove_track(&mut self, track: &Arc<Track>) -> Result<(), CatalogError> {
        match self.tracks.iter().position(|t| Arc::ptr_eq(t, track)) {
            Some(index) => {
                self.tracks.remove(index);
                Ok(())
            }
            None => Err(CatalogError::TrackNotInPlaylist(track.name.clone())),
        }
    }
}

impl MusicContent for Playlist {
    fn track_list(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    fn track_list_mut(&mut self) -> &mut Vec<Arc<Track>> {
        &mut self.tracks
    }
}

/// A comment left on a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Who said it
    pub username: String,

    /// What they said
    pub text: String,
}

/// Snapshot of a playlist's social activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactions {
    /// Every comment, oldest first
    pub comments: Vec<Comment>,

    /// Number of distinct users who liked the playlist
    pub likes: usize,
}

/// A user-built playlist with social interactions on top
///
/// Wraps a plain [`Playlist`] and adds tags, comments and likes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPlaylist {
    /// Title and track list
    base: Playlist,

    /// Free-form tags, append-only, duplicates allowed
    tags: Vec<String>,

    /// Comments in the order they were left
    comments: Vec<Comment>,

    /// Usernames that liked the playlist; a like is idempotent per user
    likes: BTreeSet<String>,
}

impl CustomPlaylist {
    /// Create a new empty custom playlist
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            base: Playlist::new(title),
            tags: Vec::new(),
            comments: Vec::new(),
            likes: BTreeSet::new(),
        }
    }

    /// Current title
    pub fn title(&self) -> &str {
        self.base.title()
    }

    /// Replace the title (same caveats as [`Playlist::set_title`])
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        self.base.set_title(new_title);
    }

    /// Remove the first occurrence of the given track
    pub fn remove_track(&mut self, track: &Arc<Track>) -> Result<(), CatalogError> {
        self.base.remove_track(track)
    }

    /// Append a tag. Duplicates are kept.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Tags in the order they were added
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Append a comment from a user. No deduplication.
    pub fn add_comment(&mut self, user: &User, text: impl Into<String>) {
        self.comments.push(Comment {
            username: user.username.clone(),
            text: text.into(),
        });
    }

    /// Comments in the order they were left
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Register a like from a user. Liking twice changes nothing.
    pub fn add_like(&mut self, user: &User) {
        self.likes.insert(user.username.clone());
    }

    /// Number of distinct users who liked the playlist
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Snapshot of comments and like count
    pub fn interactions(&self) -> Interactions {
        Interactions {
            comments: self.comments.clone(),
            likes: self.like_count(),
        }
    }
}

impl MusicContent for CustomPlaylist {
    fn track_list(&self) -> &[Arc<Track>] {
        self.base.track_list()
    }

    fn track_list_mut(&mut self) -> &mut Vec<Arc<Track>> {
        self.base.track_list_mut()
    }
}

/// Merge two track lists into a fresh custom playlist
///
/// Takes all of `a`'s tracks in order, then `b`'s tracks in order,
/// skipping any whose *name* already appeared (in `a`, or earlier in
/// `b` during this pass). Deduplication is by name, not by reference.
/// The result carries no tags, comments or likes from either source.
pub fn merge_playlists(
    a: &impl MusicContent,
    b: &impl MusicContent,
    new_title: impl Into<String>,
) -> CustomPlaylist {
    let mut merged = CustomPlaylist::new(new_title);
    let mut seen: HashSet<&str> = a.track_list().iter().map(|t| t.name.as_str()).collect();

    for track in a.track_list() {
        merged.add_track(Arc::clone(track));
    }
    for track in b.track_list() {
        if seen.insert(track.name.as_str()) {
            merged.add_track(Arc::clone(track));
        }
    }

    merged
}
