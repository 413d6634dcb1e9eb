use super::{Album, CustomPlaylist};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// A catalog user: an identity plus a personal rating history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Username (no uniqueness enforced anywhere)
    pub username: String,

    /// Personal history of (album title, rating) pairs, in the order
    /// given. Kept separately from the albums' own rating lists.
    ratings: Vec<(String, u8)>,
}

impl User {
    /// Create a new user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ratings: Vec::new(),
        }
    }

    /// Rate an album
    ///
    /// The album validates and records the rating; only then does the
    /// pair land in the user's own history. A rejected rating is
    /// recorded nowhere.
    pub fn rate_album(&mut self, album: &mut Album, rating: u8) -> Result<(), CatalogError> {
        album.add_rating(rating)?;
        self.ratings.push((album.title.clone(), rating));
        Ok(())
    }

    /// The user's personal rating history
    pub fn ratings(&self) -> &[(String, u8)] {
        &self.ratings
    }

    /// Start a new custom playlist
    ///
    /// The playlist does not keep a back-reference to its creator.
    pub fn create_playlist(&self, title: impl Into<String>) -> CustomPlaylist {
        CustomPlaylist::new(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Band;

    #[test]
    fn rating_lands_in_both_histories() {
        let band = Band::new("Iron Maiden", "Heavy Metal");
        let mut album = Album::new("The Trooper", 1983, band);
        let mut user = User::new("MegaHacker");

        user.rate_album(&mut album, 5).unwrap();

        assert_eq!(album.ratings(), &[5]);
        assert_eq!(user.ratings(), &[("The Trooper".to_string(), 5)]);
    }

    #[test]
    fn rejected_rating_is_recorded_nowhere() {
        let band = Band::new("Iron Maiden", "Heavy Metal");
        let mut album = Album::new("The Trooper", 1983, band);
        let mut user = User::new("MegaHacker");

        assert_eq!(
            user.rate_album(&mut album, 6),
            Err(CatalogError::RatingOutOfRange(6))
        );
        assert!(album.ratings().is_empty());
        assert!(user.ratings().is_empty());
    }

    #[test]
    fn created_playlist_starts_empty() {
        use crate::model::MusicContent;

        let user = User::new("MusicFan");
        let playlist = user.create_playlist("My Favorite Tracks");

        assert_eq!(playlist.title(), "My Favorite Tracks");
        assert!(playlist.is_empty());
        assert_eq!(playlist.like_count(), 0);
    }
}
