use itunes_playlist_exporter::itunes::{load_library, parse_library};
use itunes_playlist_exporter::{ExportConfig, ExportError, ExportPipeline};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

struct TestTrack<'a> {
    id: u64,
    name: &'a str,
    artist: &'a str,
    album: Option<&'a str>,
    file: &'a str,
}

/// Build a file://localhost/ URI for a local absolute path
fn file_uri(path: &Path) -> String {
    let encoded: Vec<String> = path
        .to_string_lossy()
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("file://localhost/{}", encoded.join("/"))
}

/// Create a manifest whose tracks point at dummy audio files under `music_dir`
fn create_manifest(music_dir: &Path, tracks: &[TestTrack], playlists: &[(&str, &[u64])]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>Major Version</key><integer>1</integer>
	<key>Tracks</key>
	<dict>
"#,
    );

    for track in tracks {
        let source = music_dir.join(track.file);
        fs::write(&source, format!("audio data for {}", track.name)).unwrap();

        xml.push_str(&format!(
            "\t\t<key>{id}</key>\n\t\t<dict>\n\
             \t\t\t<key>Track ID</key><integer>{id}</integer>\n\
             \t\t\t<key>Name</key><string>{name}</string>\n\
             \t\t\t<key>Artist</key><string>{artist}</string>\n",
            id = track.id,
            name = track.name,
            artist = track.artist,
        ));
        if let Some(album) = track.album {
            xml.push_str(&format!("\t\t\t<key>Album</key><string>{}</string>\n", album));
        }
        xml.push_str(&format!(
            "\t\t\t<key>Location</key><string>{}</string>\n\t\t</dict>\n",
            file_uri(&source)
        ));
    }

    xml.push_str("\t</dict>\n\t<key>Playlists</key>\n\t<array>\n");
    for (name, ids) in playlists {
        xml.push_str(&format!(
            "\t\t<dict>\n\t\t\t<key>Name</key><string>{}</string>\n",
            name
        ));
        xml.push_str("\t\t\t<key>Playlist Items</key>\n\t\t\t<array>\n");
        for id in *ids {
            xml.push_str(&format!(
                "\t\t\t\t<dict><key>Track ID</key><integer>{}</integer></dict>\n",
                id
            ));
        }
        xml.push_str("\t\t\t</array>\n\t\t</dict>\n");
    }
    xml.push_str("\t</array>\n</dict>\n</plist>\n");

    xml
}

/// Files under `root`, relative and sorted
fn exported_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

fn road_trip_tracks() -> Vec<TestTrack<'static>> {
    vec![
        TestTrack {
            id: 20,
            name: "Song B",
            artist: "B",
            album: Some("Y"),
            file: "b.mp3",
        },
        TestTrack {
            id: 10,
            name: "Song A",
            artist: "A",
            album: Some("X"),
            file: "a.mp3",
        },
    ]
}

#[test]
fn test_road_trip_export() {
    let music_dir = TempDir::new().expect("Failed to create music dir");
    let dest_dir = TempDir::new().expect("Failed to create destination dir");

    let manifest = create_manifest(
        music_dir.path(),
        &road_trip_tracks(),
        &[("Road Trip", &[20, 10])],
    );
    let library = parse_library(manifest.as_bytes()).expect("Failed to parse manifest");

    let config = ExportConfig::new(
        PathBuf::from("unused.xml"),
        dest_dir.path().to_path_buf(),
        "Road Trip",
    );
    let summary = ExportPipeline::new(config)
        .export(&library)
        .expect("Export failed");

    assert_eq!(summary.copied, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.playlist_path, dest_dir.path().join("Road Trip.m3u"));

    assert_eq!(
        exported_files(dest_dir.path()),
        vec![
            PathBuf::from("A/X/a.mp3"),
            PathBuf::from("B/Y/b.mp3"),
            PathBuf::from("Road Trip.m3u"),
        ]
    );
    assert_eq!(
        fs::read_to_string(dest_dir.path().join("A/X/a.mp3")).unwrap(),
        "audio data for Song A"
    );

    let playlist = fs::read_to_string(dest_dir.path().join("Road Trip.m3u")).unwrap();
    assert_eq!(
        playlist,
        "/storage/emulated/0/Music/A/X/a.mp3\n/storage/emulated/0/Music/B/Y/b.mp3\n"
    );
}

#[test]
fn test_rerun_does_not_recopy() {
    let music_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();

    let manifest = create_manifest(
        music_dir.path(),
        &road_trip_tracks(),
        &[("Road Trip", &[10, 20])],
    );
    let library = parse_library(manifest.as_bytes()).unwrap();
    let config = ExportConfig::new(
        PathBuf::from("unused.xml"),
        dest_dir.path().to_path_buf(),
        "Road Trip",
    );
    let pipeline = ExportPipeline::new(config);

    let first = pipeline.export(&library).unwrap();
    fs::remove_file(&first.playlist_path).unwrap();

    let second = pipeline.export(&library).unwrap();
    assert_eq!(second.copied, 0);
    assert_eq!(second.skipped, 2);
    assert_eq!(second.entries, first.entries);
    assert_eq!(
        fs::read_to_string(&second.playlist_path).unwrap().lines().count(),
        2
    );
}

#[test]
fn test_normalized_names_and_unknown_album() {
    let music_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();

    let tracks = vec![
        TestTrack {
            id: 1,
            name: "Back In Black",
            artist: "AC/DC",
            album: None,
            file: "Back In Black.mp3",
        },
        TestTrack {
            id: 2,
            name: "Hells Bells",
            artist: "AC/DC",
            album: Some("Back In Black"),
            file: "Hells Bells.mp3",
        },
    ];
    let manifest = create_manifest(music_dir.path(), &tracks, &[("Rock: Classics?", &[2, 1])]);

    let library_path = music_dir.path().join("iTunes Library.xml");
    fs::write(&library_path, manifest).unwrap();
    let library = load_library(&library_path).unwrap();

    let config = ExportConfig::new(library_path, dest_dir.path().to_path_buf(), "Rock: Classics?")
        .with_device_root("/sdcard/Music/");
    config.validate().unwrap();
    let summary = ExportPipeline::new(config).export(&library).unwrap();

    assert_eq!(summary.playlist_path, dest_dir.path().join("Rock_ Classics_.m3u"));
    assert!(dest_dir
        .path()
        .join("AC_DC/Unknown Album/Back In Black.mp3")
        .is_file());
    assert_eq!(
        summary.entries,
        vec![
            "/sdcard/Music/AC_DC/Back In Black/Hells Bells.mp3",
            "/sdcard/Music/AC_DC/Unknown Album/Back In Black.mp3",
        ]
    );
}

#[test]
fn test_dot_artist_stays_inside_destination() {
    let music_dir = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let dest_dir = root.path().join("dest");
    fs::create_dir(&dest_dir).unwrap();

    let tracks = vec![TestTrack {
        id: 1,
        name: "Up One",
        artist: "..",
        album: None,
        file: "a.mp3",
    }];
    let manifest = create_manifest(music_dir.path(), &tracks, &[("Dots", &[1])]);
    let library = parse_library(manifest.as_bytes()).unwrap();

    let config = ExportConfig::new(PathBuf::from("unused.xml"), dest_dir.clone(), "Dots");
    let summary = ExportPipeline::new(config).export(&library).unwrap();

    assert_eq!(
        summary.entries,
        vec!["/storage/emulated/0/Music/_/Unknown Album/a.mp3"]
    );
    assert!(dest_dir.join("_/Unknown Album/a.mp3").is_file());
    assert!(!root.path().join("Unknown Album").exists());
}

#[test]
fn test_missing_playlist() {
    let music_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();

    let manifest = create_manifest(music_dir.path(), &road_trip_tracks(), &[("Road Trip", &[10])]);
    let library = parse_library(manifest.as_bytes()).unwrap();
    let config = ExportConfig::new(
        PathBuf::from("unused.xml"),
        dest_dir.path().to_path_buf(),
        "road trip",
    );

    let result = ExportPipeline::new(config).export(&library);
    assert!(matches!(result, Err(ExportError::PlaylistNotFound(name)) if name == "road trip"));
    assert!(exported_files(dest_dir.path()).is_empty());
}

#[test]
fn test_playlist_references_missing_track() {
    let music_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();

    let manifest = create_manifest(
        music_dir.path(),
        &road_trip_tracks(),
        &[("Road Trip", &[10, 99])],
    );
    let library = parse_library(manifest.as_bytes()).unwrap();
    let config = ExportConfig::new(
        PathBuf::from("unused.xml"),
        dest_dir.path().to_path_buf(),
        "Road Trip",
    );

    let result = ExportPipeline::new(config).export(&library);
    assert!(matches!(result, Err(ExportError::TrackNotFound(99))));

    // Track 10 sorts first and was copied before the failure; no playlist is written
    assert_eq!(exported_files(dest_dir.path()), vec![PathBuf::from("A/X/a.mp3")]);
}

#[test]
fn test_missing_source_file() {
    let music_dir = TempDir::new().unwrap();
    let dest_dir = TempDir::new().unwrap();

    let manifest = create_manifest(music_dir.path(), &road_trip_tracks(), &[("Road Trip", &[10])]);
    fs::remove_file(music_dir.path().join("a.mp3")).unwrap();

    let library = parse_library(manifest.as_bytes()).unwrap();
    let config = ExportConfig::new(
        PathBuf::from("unused.xml"),
        dest_dir.path().to_path_buf(),
        "Road Trip",
    );

    let result = ExportPipeline::new(config).export(&library);
    assert!(matches!(result, Err(ExportError::Copy { .. })));
}
