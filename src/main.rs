use anyhow::{Context, Result};
use clap::Parser;
use itunes_playlist_exporter::export::DEFAULT_DEVICE_MUSIC_ROOT;
use itunes_playlist_exporter::{ExportConfig, ExportPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itunes-playlist-exporter")]
#[command(about = "Export an iTunes playlist and its songs to a device folder", long_about = None)]
struct Args {
    /// Name of the playlist to export
    #[arg(required_unless_present = "list_playlists")]
    playlist: Option<String>,

    /// Local directory to export to (must exist)
    #[arg(required_unless_present = "list_playlists")]
    destination_dir: Option<PathBuf>,

    /// Path to the iTunes library manifest
    #[arg(
        short = 'l',
        long,
        default_value = "~/Music/iTunes/iTunes Library.xml"
    )]
    library: String,

    /// Music folder on the device that playlist entries point into
    #[arg(long, default_value = DEFAULT_DEVICE_MUSIC_ROOT)]
    device_root: String,

    /// List the library's playlists and exit
    #[arg(long)]
    list_playlists: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let library_path = PathBuf::from(shellexpand::tilde(&args.library).as_ref());

    if args.list_playlists {
        let library = itunes_playlist_exporter::itunes::load_library(&library_path)?;
        for playlist in library.playlists() {
            log::info!("{} ({} tracks)", playlist.name, playlist.len());
        }
        return Ok(());
    }

    let (Some(playlist), Some(destination_dir)) = (args.playlist, args.destination_dir) else {
        anyhow::bail!("A playlist name and a destination directory are required");
    };

    let config = ExportConfig::new(library_path, destination_dir, playlist)
        .with_device_root(args.device_root);
    config.validate()?;

    let library = itunes_playlist_exporter::itunes::load_library(&config.library_path)
        .with_context(|| format!("Failed to load library {:?}", config.library_path))?;

    let pipeline = ExportPipeline::new(config);
    let summary = pipeline
        .export(&library)
        .context("Playlist export failed")?;

    log::info!(
        "Playlist ready at {:?} ({} songs)",
        summary.playlist_path,
        summary.entries.len()
    );

    Ok(())
}
