//! Conversion of manifest `Location` URIs to filesystem paths

use std::path::PathBuf;

/// Prefix every local track location carries in the manifest
pub const LOCAL_FILE_PREFIX: &str = "file://localhost/";

/// Convert a `file://localhost/` URI to a PathBuf
///
/// The prefix swallows the leading `/` of POSIX paths, so it is restored
/// unless the decoded path begins with a drive letter (`C:/Music/...`).
/// Returns `None` if the prefix is missing or the decoded text is not UTF-8.
pub fn location_to_path(location: &str) -> Option<PathBuf> {
    let encoded = location.strip_prefix(LOCAL_FILE_PREFIX)?;
    let decoded = urlencoding::decode(encoded).ok()?;

    if has_drive_letter(&decoded) {
        Some(PathBuf::from(decoded.into_owned()))
    } else {
        Some(PathBuf::from(format!("/{}", decoded)))
    }
}

fn has_drive_letter(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic()
    )
}
