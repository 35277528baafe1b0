use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// A single track record from the manifest's `Tracks` dictionary
///
/// Only the keys the export needs are read; everything else in the record
/// (play counts, dates, persistent IDs...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Track {
    /// Numeric track identifier (also the key of the `Tracks` dictionary)
    #[serde(rename = "Track ID", default)]
    pub track_id: u64,

    /// Track title
    #[serde(rename = "Name")]
    pub name: Option<String>,

    /// Artist name
    #[serde(rename = "Artist")]
    pub artist: Option<String>,

    /// Album name (optional)
    #[serde(rename = "Album")]
    pub album: Option<String>,

    /// Part of a compilation album
    #[serde(rename = "Compilation", default, deserialize_with = "deserialize_flag")]
    pub compilation: bool,

    /// file://localhost/ URI of the audio file
    #[serde(rename = "Location")]
    pub location: Option<String>,
}

/// Accept `<true/>`/`<false/>` as well as integer flags (non-zero is set)
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or integer flag")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
