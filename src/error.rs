//! Error types for the playlist export

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExportError`
pub type Result<T> = std::result::Result<T, ExportError>;

/// Everything that can abort an export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Missing manifest file or destination directory
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The manifest is not a property list with the expected schema
    #[error("Failed to parse library manifest: {0}")]
    Parse(#[from] plist::Error),

    #[error("Playlist not found: {0:?}")]
    PlaylistNotFound(String),

    /// A playlist references an ID absent from the track table
    #[error("Track {0} is referenced by the playlist but missing from the library")]
    TrackNotFound(u64),

    #[error("Track {track_id} has no {field:?} field")]
    MissingField { track_id: u64, field: &'static str },

    #[error("Track {track_id} has an unusable location: {location:?}")]
    InvalidLocation { track_id: u64, location: String },

    #[error("Failed to copy {source_path:?} to {destination:?}: {source}")]
    Copy {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
