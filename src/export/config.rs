//! Export configuration

use crate::error::{ExportError, Result};
use std::path::PathBuf;

/// Music root on the playback device that playlist entries point into
pub const DEFAULT_DEVICE_MUSIC_ROOT: &str = "/storage/emulated/0/Music";

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Path to the iTunes library manifest
    pub library_path: PathBuf,

    /// Local directory that receives the copied tree and the .m3u file
    pub destination_dir: PathBuf,

    /// Name of the playlist to export
    pub playlist_name: String,

    /// Device path prefix written into playlist entries (no trailing `/`)
    pub device_music_root: String,
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(
        library_path: PathBuf,
        destination_dir: PathBuf,
        playlist_name: impl Into<String>,
    ) -> Self {
        Self {
            library_path,
            destination_dir,
            playlist_name: playlist_name.into(),
            device_music_root: DEFAULT_DEVICE_MUSIC_ROOT.to_string(),
        }
    }

    /// Set the device music root
    pub fn with_device_root(mut self, root: impl Into<String>) -> Self {
        let root = root.into();
        self.device_music_root = root.trim_end_matches('/').to_string();
        self
    }

    /// Check that the manifest and the destination directory exist
    pub fn validate(&self) -> Result<()> {
        if !self.library_path.is_file() {
            return Err(ExportError::Configuration(format!(
                "The iTunes library file {:?} does not exist",
                self.library_path
            )));
        }

        if !self.destination_dir.is_dir() {
            return Err(ExportError::Configuration(format!(
                "The destination directory {:?} does not exist",
                self.destination_dir
            )));
        }

        Ok(())
    }
}
