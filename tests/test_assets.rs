use std::fs;
use std::path::Path;

use space_shooter::assets::*;
use space_shooter::error::{AssetError, AssetKind};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut b = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
    b.extend_from_slice(&13u32.to_be_bytes());
    b.extend_from_slice(b"IHDR");
    b.extend_from_slice(&width.to_be_bytes());
    b.extend_from_slice(&height.to_be_bytes());
    b.extend_from_slice(&[8, 2, 0, 0, 0]);
    b.extend_from_slice(&[0; 4]); // crc, not checked
    b
}

fn wav_bytes(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let data: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    let mut b = Vec::new();
    b.extend_from_slice(b"RIFF");
    b.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    b.extend_from_slice(b"WAVE");
    b.extend_from_slice(b"fmt ");
    b.extend_from_slice(&16u32.to_le_bytes());
    b.extend_from_slice(&1u16.to_le_bytes()); // PCM
    b.extend_from_slice(&1u16.to_le_bytes()); // mono
    b.extend_from_slice(&sample_rate.to_le_bytes());
    b.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    b.extend_from_slice(&2u16.to_le_bytes());
    b.extend_from_slice(&16u16.to_le_bytes());
    b.extend_from_slice(b"data");
    b.extend_from_slice(&(data.len() as u32).to_le_bytes());
    b.extend_from_slice(&data);
    b
}

fn write_assets(root: &Path, png: &[u8], wav: &[u8]) {
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::write(root.join("assets/background.png"), png).unwrap();
    fs::write(root.join("assets/shoot.wav"), wav).unwrap();
}

// ── headers ───────────────────────────────────────────────────────────────────

#[test]
fn png_header_dimensions() {
    assert_eq!(parse_png_header(&png_bytes(800, 600)), Ok((800, 600)));
}

#[test]
fn png_header_rejects_bad_input() {
    assert_eq!(parse_png_header(b"short"), Err("file too short"));
    let mut bad = png_bytes(1, 1);
    bad[1] = b'X';
    assert_eq!(parse_png_header(&bad), Err("bad signature"));
    assert_eq!(parse_png_header(&png_bytes(0, 10)), Err("zero dimension"));
}

#[test]
fn wav_header_fields() {
    let sample = parse_wav_header(&wav_bytes(8000, &[0; 4000])).unwrap();
    assert_eq!(sample.channels, 1);
    assert_eq!(sample.sample_rate, 8000);
    assert_eq!(sample.bits_per_sample, 16);
    assert_eq!(sample.data_len, 8000);
    assert_eq!(sample.duration_secs(), 0.5);
}

#[test]
fn wav_header_skips_unknown_chunks() {
    let mut b = wav_bytes(8000, &[1, 2]);
    // Insert an odd-length LIST chunk (padded) between the header and fmt.
    let list = [b"LIST".as_slice(), &3u32.to_le_bytes(), &[7, 7, 7, 0]].concat();
    b.splice(12..12, list);
    let sample = parse_wav_header(&b).unwrap();
    assert_eq!(sample.data_len, 4);
}

#[test]
fn wav_header_rejects_bad_input() {
    assert_eq!(parse_wav_header(b"RIFF").unwrap_err(), "file too short");
    assert_eq!(
        parse_wav_header(b"RIFF\0\0\0\0AVI LIST").unwrap_err(),
        "not a RIFF/WAVE container"
    );
    assert_eq!(
        parse_wav_header(&wav_bytes(8000, &[])).unwrap_err(),
        "empty data chunk"
    );
}

// ── Assets::load ──────────────────────────────────────────────────────────────

#[test]
fn load_reads_both_assets() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path(), &png_bytes(80, 60), &wav_bytes(22050, &[0; 100]));
    let assets = Assets::load(dir.path()).unwrap();
    assert_eq!((assets.background.width, assets.background.height), (80, 60));
    assert_eq!(assets.shoot.sample_rate, 22050);
}

#[test]
fn load_missing_background_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Assets::load(dir.path()).unwrap_err();
    assert!(matches!(err, AssetError::NotFound { .. }));
    assert!(err.path().ends_with("assets/background.png"));
    assert!(err.to_string().starts_with("asset not found"));
}

#[test]
fn load_invalid_sound_names_expected_format() {
    let dir = tempfile::tempdir().unwrap();
    write_assets(dir.path(), &png_bytes(8, 8), b"not a wav file at all");
    let err = Assets::load(dir.path()).unwrap_err();
    match &err {
        AssetError::InvalidFormat { expected, .. } => assert_eq!(*expected, AssetKind::Wav),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("is not a valid WAV sound"));
}

#[test]
fn load_directory_in_place_of_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("assets/background.png")).unwrap();
    let err = load_background(&dir.path().join("assets/background.png")).unwrap_err();
    assert!(matches!(err, AssetError::Unreadable { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn bundled_assets_load() {
    let assets = Assets::load(Path::new(env!("CARGO_MANIFEST_DIR"))).unwrap();
    assert!(assets.background.width > 0);
    assert!(assets.shoot.duration_secs() > 0.0);
}
