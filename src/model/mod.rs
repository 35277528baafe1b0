//! Data model for the iTunes library manifest
//!
//! The structures mirror the manifest's `Tracks` / `Playlists` schema and
//! deserialize directly from the property list.

mod library;
mod playlist;
mod song;
mod track;

pub use library::Library;
pub use playlist::{Playlist, PlaylistItem};
pub use song::ResolvedSong;
pub use track::Track;
