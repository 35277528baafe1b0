//! Destination tree layout and file copying

use super::naming::normalize_name;
use crate::error::{ExportError, Result};
use crate::model::ResolvedSong;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Whether a song was copied or already present at its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    AlreadyPresent,
}

/// Lays out `artist/album/file` under the destination directory and the
/// matching path on the device
pub struct DeviceOrganizer {
    /// Local export root
    destination_dir: PathBuf,

    /// Music root on the device, no trailing `/`
    device_music_root: String,
}

impl DeviceOrganizer {
    pub fn new(destination_dir: PathBuf, device_music_root: String) -> Self {
        Self {
            destination_dir,
            device_music_root,
        }
    }

    /// Relative `artist/album` segments for a song
    fn segments(song: &ResolvedSong) -> (String, String) {
        (normalize_name(&song.artist), normalize_name(&song.album))
    }

    /// Local destination of a song's audio file
    pub fn music_file_path(&self, song: &ResolvedSong) -> PathBuf {
        let (artist, album) = Self::segments(song);
        self.destination_dir
            .join(artist)
            .join(album)
            .join(song.file_name())
    }

    /// Path of the song as the device will see it
    pub fn device_path(&self, song: &ResolvedSong) -> String {
        let (artist, album) = Self::segments(song);
        format!(
            "{}/{}/{}/{}",
            self.device_music_root,
            artist,
            album,
            song.file_name()
        )
    }

    /// Path of the .m3u file for a playlist
    pub fn playlist_path(&self, playlist_name: &str) -> PathBuf {
        self.destination_dir
            .join(format!("{}.m3u", normalize_name(playlist_name)))
    }

    /// Copy a song's file to `dest` unless a file is already there
    pub fn copy_music_file(&self, source: &Path, dest: &Path) -> Result<CopyOutcome> {
        if dest.is_file() {
            return Ok(CopyOutcome::AlreadyPresent);
        }

        copy_contents(source, dest).map_err(|source_err| ExportError::Copy {
            source_path: source.to_path_buf(),
            destination: dest.to_path_buf(),
            source: source_err,
        })?;

        Ok(CopyOutcome::Copied)
    }
}

/// Stream the bytes across; permissions and timestamps are not carried over
fn copy_contents(source: &Path, dest: &Path) -> io::Result<u64> {
    let mut reader = File::open(source)?;
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = File::create(dest)?;
    io::copy(&mut reader, &mut writer)
}
