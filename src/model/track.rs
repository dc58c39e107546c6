//! Track metadata and the ordered, read-only track list

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry of the track list. Identity is its index in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(rename = "artwork")]
    pub artwork_ref: String,
    #[serde(rename = "media")]
    pub media_ref: String,
}

impl Track {
    pub fn new(title: &str, artist: &str, album: Option<&str>, media_ref: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.map(str::to_string),
            artwork_ref: String::new(),
            media_ref: media_ref.to_string(),
        }
    }

    /// "Artist - Title", as listed in the menu
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

#[derive(Error, Debug)]
pub enum TrackListError {
    #[error("Failed to read track list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed track list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered list of tracks, cheap to clone and never mutated after loading
#[derive(Clone, Debug, Default)]
pub struct TrackList {
    tracks: Arc<[Track]>,
}

impl TrackList {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into(),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, TrackListError> {
        let tracks: Vec<Track> = serde_json::from_str(content)?;
        Ok(Self::new(tracks))
    }

    pub fn load_from_disk(path: &Path) -> Result<Self, TrackListError> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), tracks = list.len(), "Track list loaded");
        Ok(list)
    }

    /// Small built-in list used when no track file is configured
    pub fn demo() -> Self {
        Self::new(vec![
            Track::new("Phetamines", "Ally Evenson", Some("Phetamines (Single)"), "Us4gHuTnVUk"),
            Track::new("Bed", "CENDE", Some("#1 Hit Single"), "OLbhp2YN3m0"),
            Track::new("моє місце (My Place)", "левко (Levko)", Some("труднощі"), "YDlAF-nBr58"),
        ])
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tracks_with_optional_album() {
        let json = r#"[
            {"title": "A", "artist": "X", "album": "One", "artwork": "a.jpg", "media": "m1"},
            {"title": "B", "artist": "Y", "artwork": "b.jpg", "media": "m2"}
        ]"#;
        let list = TrackList::from_json(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().album.as_deref(), Some("One"));
        assert_eq!(list.get(1).unwrap().album, None);
        assert_eq!(list.get(1).unwrap().media_ref, "m2");
        assert_eq!(list.get(1).unwrap().display_name(), "Y - B");
    }

    #[test]
    fn empty_list_is_accepted() {
        let list = TrackList::from_json("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn rejects_missing_media() {
        let json = r#"[{"title": "A", "artist": "X", "artwork": "a.jpg"}]"#;
        assert!(matches!(
            TrackList::from_json(json),
            Err(TrackListError::Json(_))
        ));
    }
}
