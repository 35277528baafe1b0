//! Playlist file writing

use super::organizer::DeviceOrganizer;
use crate::error::{ExportError, Result};
use crate::model::ResolvedSong;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Device paths for `songs`, ordered by album, then file name, then artist
///
/// Sorting uses the raw album and artist values, so the order follows the
/// library's names rather than their normalized forms.
pub fn playlist_entries(songs: &[ResolvedSong], organizer: &DeviceOrganizer) -> Vec<String> {
    let mut keyed: Vec<((&str, String, &str), String)> = songs
        .iter()
        .map(|song| {
            let key = (song.album.as_str(), song.file_name(), song.artist.as_str());
            (key, organizer.device_path(song))
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// Write one entry per line, UTF-8, `\n`-terminated
pub fn write_m3u(path: &Path, entries: &[String]) -> Result<()> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    for entry in entries {
        writeln!(writer, "{}", entry).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    Ok(())
}
