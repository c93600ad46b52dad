//! Startup asset loading.
//!
//! Only headers are interpreted: the renderer is a terminal and the audio
//! sink is the terminal bell, so the payloads are validated and described
//! rather than decoded.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::constants::{BACKGROUND_PATH, SHOOT_SOUND_PATH};
use crate::error::{AssetError, AssetKind};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SoundSample {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Length of the `data` chunk in bytes.
    pub data_len: u32,
}

impl SoundSample {
    pub fn duration_secs(&self) -> f64 {
        let bytes_per_sec =
            self.sample_rate as f64 * self.channels as f64 * (self.bits_per_sample as f64 / 8.0);
        if bytes_per_sec == 0.0 {
            0.0
        } else {
            self.data_len as f64 / bytes_per_sec
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assets {
    pub background: Background,
    pub shoot: SoundSample,
}

impl Assets {
    /// Load the fixed asset files relative to `root`.
    pub fn load(root: &Path) -> Result<Assets, AssetError> {
        let background = load_background(&root.join(BACKGROUND_PATH))?;
        let shoot = load_sound(&root.join(SHOOT_SOUND_PATH))?;
        info!(
            width = background.width,
            height = background.height,
            "background loaded"
        );
        info!(
            channels = shoot.channels,
            sample_rate = shoot.sample_rate,
            duration_secs = shoot.duration_secs(),
            "shoot sound loaded"
        );
        Ok(Assets { background, shoot })
    }
}

fn read(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound {
            path: path.to_path_buf(),
        },
        _ => AssetError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

pub fn load_background(path: &Path) -> Result<Background, AssetError> {
    let bytes = read(path)?;
    let (width, height) = parse_png_header(&bytes).map_err(|reason| AssetError::InvalidFormat {
        path: path.to_path_buf(),
        expected: AssetKind::Png,
        reason,
    })?;
    Ok(Background {
        width,
        height,
        bytes,
    })
}

pub fn load_sound(path: &Path) -> Result<SoundSample, AssetError> {
    let bytes = read(path)?;
    parse_wav_header(&bytes).map_err(|reason| AssetError::InvalidFormat {
        path: path.to_path_buf(),
        expected: AssetKind::Wav,
        reason,
    })
}

fn be_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

/// Signature, then the IHDR chunk which must come first.
pub fn parse_png_header(bytes: &[u8]) -> Result<(u32, u32), &'static str> {
    if bytes.len() < 24 {
        return Err("file too short");
    }
    if bytes[..8] != PNG_SIGNATURE {
        return Err("bad signature");
    }
    if &bytes[12..16] != b"IHDR" {
        return Err("missing IHDR chunk");
    }
    let width = be_u32(&bytes[16..20]);
    let height = be_u32(&bytes[20..24]);
    if width == 0 || height == 0 {
        return Err("zero dimension");
    }
    Ok((width, height))
}

/// RIFF/WAVE container with a PCM `fmt ` chunk and a non-empty `data` chunk.
pub fn parse_wav_header(bytes: &[u8]) -> Result<SoundSample, &'static str> {
    if bytes.len() < 12 {
        return Err("file too short");
    }
    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err("not a RIFF/WAVE container");
    }

    let mut fmt: Option<(u16, u32, u16)> = None;
    let mut pos = 12;
    while pos + 8 <= bytes.len() {
        let id = &bytes[pos..pos + 4];
        let len = le_u32(&bytes[pos + 4..pos + 8]) as usize;
        let body = pos + 8;
        match id {
            b"fmt " => {
                if len < 16 || body + 16 > bytes.len() {
                    return Err("truncated fmt chunk");
                }
                let channels = le_u16(&bytes[body + 2..body + 4]);
                let sample_rate = le_u32(&bytes[body + 4..body + 8]);
                let bits = le_u16(&bytes[body + 14..body + 16]);
                fmt = Some((channels, sample_rate, bits));
            }
            b"data" => {
                let (channels, sample_rate, bits_per_sample) =
                    fmt.ok_or("data chunk before fmt chunk")?;
                if len == 0 {
                    return Err("empty data chunk");
                }
                return Ok(SoundSample {
                    channels,
                    sample_rate,
                    bits_per_sample,
                    data_len: len as u32,
                });
            }
            _ => {}
        }
        // Chunks are padded to an even length.
        pos = body + len + (len & 1);
    }
    Err("missing data chunk")
}
