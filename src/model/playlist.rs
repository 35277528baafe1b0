use serde::Deserialize;

/// Represents a playlist
#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    /// Playlist name
    #[serde(rename = "Name")]
    pub name: String,

    /// Playlist entries (ordered). Folders and empty playlists carry none.
    #[serde(rename = "Playlist Items", default)]
    pub items: Vec<PlaylistItem>,
}

/// Entry in a playlist, referencing a track by ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlaylistItem {
    /// Track ID (references Track::track_id)
    #[serde(rename = "Track ID")]
    pub track_id: u64,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Add a track to this playlist
    pub fn add_track(&mut self, track_id: u64) {
        self.items.push(PlaylistItem { track_id });
    }

    /// Member IDs in playlist order
    pub fn track_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().map(|item| item.track_id)
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
