//! Export orchestration and destination layout

pub mod config;
pub mod m3u;
pub mod naming;
pub mod organizer;
pub mod pipeline;

pub use config::{ExportConfig, DEFAULT_DEVICE_MUSIC_ROOT};
pub use naming::normalize_name;
pub use organizer::DeviceOrganizer;
pub use pipeline::{ExportPipeline, ExportSummary};
