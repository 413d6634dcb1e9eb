use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A band (or solo artist) in the catalog
///
/// Immutable after construction; tracks and albums point back at their
/// band via `Arc<Band>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    /// Band name
    pub name: String,

    /// Genre label (free-form, e.g. "Heavy Metal")
    pub genre: String,
}

impl Band {
    /// Create a new band, ready for sharing
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            genre: genre.into(),
        })
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.genre)
    }
}
