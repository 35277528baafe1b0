use std::path::{Path, PathBuf};

/// Display and path metadata for one playlist member, ready for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSong {
    pub name: String,

    /// `Compilations` for compilation tracks
    pub artist: String,

    /// `Unknown Album` when the track has none
    pub album: String,

    /// Decoded filesystem path of the source audio file
    pub source_path: PathBuf,
}

impl ResolvedSong {
    /// Final component of the source path
    pub fn file_name(&self) -> String {
        let path: &Path = &self.source_path;
        path.file_name()
            .unwrap_or_else(|| path.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}
