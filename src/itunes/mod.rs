//! iTunes library manifest parsing
//!
//! Reads the `iTunes Library.xml` property list (XML or binary encoding) into
//! the unified [`Library`] model.

mod location;

pub use location::{location_to_path, LOCAL_FILE_PREFIX};

use crate::error::{ExportError, Result};
use crate::model::Library;
use std::io;
use std::path::Path;

/// Parse a manifest from its raw property-list bytes
pub fn parse_library(bytes: &[u8]) -> Result<Library> {
    let library: Library = plist::from_bytes(bytes)?;
    Ok(library)
}

/// Load the manifest stored at `path`
///
/// # Arguments
/// * `path` - Path to the library file (typically ~/Music/iTunes/iTunes Library.xml)
pub fn load_library(path: &Path) -> Result<Library> {
    log::info!("Parsing iTunes library from {:?}", path);
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ExportError::Configuration(format!(
            "The iTunes library file {:?} does not exist",
            path
        )),
        _ => ExportError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let library = parse_library(&bytes)?;

    log::info!(
        "Loaded library: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    Ok(library)
}
