//! iTunes playlist exporter
//!
//! Copies the songs of one iTunes playlist into an `artist/album` tree and
//! writes a matching .m3u playlist for a mobile device.

pub mod error;
pub mod export;
pub mod itunes;
pub mod model;

pub use error::{ExportError, Result};
pub use export::config::ExportConfig;
pub use export::pipeline::{ExportPipeline, ExportSummary};
