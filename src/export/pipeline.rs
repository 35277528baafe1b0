//! Main export pipeline orchestration

use super::config::ExportConfig;
use super::m3u::{playlist_entries, write_m3u};
use super::organizer::{CopyOutcome, DeviceOrganizer};
use crate::error::{ExportError, Result};
use crate::model::Library;
use std::path::PathBuf;

/// What an export run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Files copied during this run
    pub copied: usize,

    /// Files already present at their destination
    pub skipped: usize,

    /// The written .m3u file
    pub playlist_path: PathBuf,

    /// Playlist lines, in file order
    pub entries: Vec<String>,
}

/// Main export pipeline
pub struct ExportPipeline {
    config: ExportConfig,
    organizer: DeviceOrganizer,
}

impl ExportPipeline {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig) -> Self {
        let organizer = DeviceOrganizer::new(
            config.destination_dir.clone(),
            config.device_music_root.clone(),
        );

        Self { config, organizer }
    }

    /// Export the configured playlist from `library`
    ///
    /// Songs are copied in ascending track-ID order; the playlist file is
    /// written only after every song has been handled. A failure part way
    /// through leaves the files copied so far in place.
    pub fn export(&self, library: &Library) -> Result<ExportSummary> {
        let name = &self.config.playlist_name;
        log::info!("Reading playlist {:?}", name);

        let track_ids = library
            .resolve_playlist(name)
            .ok_or_else(|| ExportError::PlaylistNotFound(name.clone()))?;

        log::info!(
            "Exporting {} tracks to {:?}",
            track_ids.len(),
            self.config.destination_dir
        );

        let mut songs = Vec::with_capacity(track_ids.len());
        let mut copied = 0;
        let mut skipped = 0;

        for (i, track_id) in track_ids.iter().enumerate() {
            let song = library.resolve_song(*track_id)?;
            let dest_path = self.organizer.music_file_path(&song);

            match self.organizer.copy_music_file(&song.source_path, &dest_path)? {
                CopyOutcome::Copied => {
                    log::info!(
                        "[{}/{}] Copying {:?} from {}",
                        i + 1,
                        track_ids.len(),
                        song.name,
                        song.album
                    );
                    copied += 1;
                }
                CopyOutcome::AlreadyPresent => {
                    log::debug!("Already present: {:?}", dest_path);
                    skipped += 1;
                }
            }

            songs.push(song);
        }

        let playlist_path = self.organizer.playlist_path(name);
        log::info!("Writing playlist {:?} to {:?}", name, playlist_path);

        let entries = playlist_entries(&songs, &self.organizer);
        write_m3u(&playlist_path, &entries)?;

        log::info!("Export complete: {} copied, {} already present", copied, skipped);

        Ok(ExportSummary {
            copied,
            skipped,
            playlist_path,
            entries,
        })
    }
}
