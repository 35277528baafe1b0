use super::{Playlist, ResolvedSong, Track};
use crate::error::{ExportError, Result};
use crate::itunes::location_to_path;
use serde::Deserialize;
use std::collections::HashMap;

/// Artist substituted for every track flagged as part of a compilation
pub const COMPILATIONS_ARTIST: &str = "Compilations";

/// Album substituted when a track carries none
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Complete music library containing tracks and playlists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Library {
    /// All tracks indexed by their string-encoded ID
    #[serde(rename = "Tracks", default)]
    tracks: HashMap<String, Track>,

    /// All playlists, in manifest order
    #[serde(rename = "Playlists", default)]
    playlists: Vec<Playlist>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to the library, keyed by its `track_id`
    pub fn add_track(&mut self, track: Track) {
        self.tracks.insert(track.track_id.to_string(), track);
    }

    /// Add a playlist to the library
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Get a track by ID
    pub fn get_track(&self, id: u64) -> Option<&Track> {
        self.tracks.get(&id.to_string())
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// First playlist whose name matches exactly (case-sensitive)
    pub fn find_playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.name == name)
    }

    /// Member track IDs of the named playlist, sorted ascending by ID
    ///
    /// The export processes songs in ID order, not in the user's playlist
    /// order. Returns `None` when no playlist has that name.
    pub fn resolve_playlist(&self, name: &str) -> Option<Vec<u64>> {
        let playlist = self.find_playlist(name)?;
        let mut ids: Vec<u64> = playlist.track_ids().collect();
        ids.sort_unstable();
        Some(ids)
    }

    /// Map a track ID to the metadata used for export
    pub fn resolve_song(&self, track_id: u64) -> Result<ResolvedSong> {
        let track = self
            .get_track(track_id)
            .ok_or(ExportError::TrackNotFound(track_id))?;

        let name = track.name.clone().ok_or(ExportError::MissingField {
            track_id,
            field: "Name",
        })?;

        let artist = if track.compilation {
            COMPILATIONS_ARTIST.to_string()
        } else {
            track.artist.clone().ok_or(ExportError::MissingField {
                track_id,
                field: "Artist",
            })?
        };

        let album = track
            .album
            .clone()
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

        let location = track.location.as_deref().unwrap_or_default();
        let source_path = location_to_path(location)
            .filter(|path| path.file_name().is_some())
            .ok_or_else(|| ExportError::InvalidLocation {
                track_id,
                location: location.to_string(),
            })?;

        Ok(ResolvedSong {
            name,
            artist,
            album,
            source_path,
        })
    }
}
