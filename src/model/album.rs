use super::{Band, MusicContent, Track};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An album: an ordered track list plus a rating history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// Album title
    pub title: String,

    /// Year of release
    pub release_year: i32,

    /// The band that released this album
    pub band: Arc<Band>,

    /// Ordered track list
    tracks: Vec<Arc<Track>>,

    /// Every rating ever given, in the order received.
    /// Append-only; the same user may appear any number of times.
    ratings: Vec<u8>,

    /// 1-based position of each track at insertion time, keyed by name.
    /// Known limitation: two same-named tracks in one album overwrite
    /// each other's recorded position.
    track_order: HashMap<String, usize>,
}

impl Album {
    /// Create a new empty album
    pub fn new(title: impl Into<String>, release_year: i32, band: Arc<Band>) -> Self {
        Self {
            title: title.into(),
            release_year,
            band,
            tracks: Vec::new(),
            ratings: Vec::new(),
            track_order: HashMap::new(),
        }
    }

    /// Record a rating between 1 and 5 (inclusive)
    ///
    /// Out-of-range values are rejected and leave the rating history
    /// untouched. Ratings are never replaced or deduplicated.
    pub fn add_rating(&mut self, rating: u8) -> Result<(), CatalogError> {
        if !(1..=5).contains(&rating) {
            return Err(CatalogError::RatingOutOfRange(rating));
        }
        self.ratings.push(rating);
        Ok(())
    }

    /// Arithmetic mean over every recorded rating
    ///
    /// Returns 0.0 when there are no ratings yet (not an error, not NaN).
    pub fn calculate_average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        f64::from(sum) / self.ratings.len() as f64
    }

    /// All recorded ratings, in the order received
    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    /// The 1-based position recorded for a track name at insertion time
    pub fn track_position(&self, name: &str) -> Option<usize> {
        self.track_order.get(name).copied()
    }
}

impl MusicContent for Album {
    fn track_list(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    fn track_list_mut(&mut self) -> &mut Vec<Arc<Track>> {
        &mut self.tracks
    }

    /// Append a track and record its insertion position by name
    fn add_track(&mut self, track: Arc<Track>) {
        let name = track.name.clone();
        self.tracks.push(track);
        self.track_order.insert(name, self.tracks.len());
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.band.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_album() -> Album {
        let band = Band::new("Iron Maiden", "Heavy Metal");
        Album::new("The Trooper", 1983, band)
    }

    #[test]
    fn rating_in_range_is_recorded() {
        let mut album = sample_album();
        album.add_rating(1).unwrap();
        album.add_rating(5).unwrap();
        assert_eq!(album.ratings(), &[1, 5]);
    }

    #[test]
    fn rating_out_of_range_is_rejected_and_not_recorded() {
        let mut album = sample_album();
        assert_eq!(album.add_rating(0), Err(CatalogError::RatingOutOfRange(0)));
        assert_eq!(album.add_rating(6), Err(CatalogError::RatingOutOfRange(6)));
        assert!(album.ratings().is_empty());
    }

    #[test]
    fn average_of_no_ratings_is_zero() {
        let album = sample_album();
        assert_eq!(album.calculate_average_rating(), 0.0);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let mut album = sample_album();
        album.add_rating(5).unwrap();
        album.add_rating(4).unwrap();
        assert_eq!(album.calculate_average_rating(), 4.5);
    }

    #[test]
    fn repeated_ratings_all_count() {
        let mut album = sample_album();
        // Same "user" rating twice: both recorded
        album.add_rating(2).unwrap();
        album.add_rating(4).unwrap();
        album.add_rating(4).unwrap();
        assert_eq!(album.ratings().len(), 3);
        assert!((album.calculate_average_rating() - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn track_positions_follow_insertion_order() {
        let band = Band::new("Dio", "Heavy Metal");
        let mut album = Album::new("Holy Diver", 1983, Arc::clone(&band));

        album.add_track(Track::new("Stand Up and Shout", 3.18, Arc::clone(&band)));
        album.add_track(Track::new("Holy Diver", 5.54, Arc::clone(&band)));
        album.add_track(Track::new("Gypsy", 3.39, band));

        assert_eq!(album.track_position("Stand Up and Shout"), Some(1));
        assert_eq!(album.track_position("Gypsy"), Some(3));
        assert_eq!(album.track_position("Rainbow in the Dark"), None);
    }

    #[test]
    fn same_named_tracks_overwrite_recorded_position() {
        let band = Band::new("Dio", "Heavy Metal");
        let mut album = Album::new("Holy Diver", 1983, Arc::clone(&band));

        album.add_track(Track::new("Holy Diver", 5.54, Arc::clone(&band)));
        album.add_track(Track::new("Gypsy", 3.39, Arc::clone(&band)));
        album.add_track(Track::new("Holy Diver", 6.02, band));

        // Both tracks remain in the list, but the recorded position
        // reflects only the most recently added one.
        assert_eq!(album.track_count(), 3);
        assert_eq!(album.track_position("Holy Diver"), Some(3));
    }

    #[test]
    fn display_format() {
        let album = sample_album();
        assert_eq!(album.to_string(), "The Trooper by Iron Maiden");
    }
}
