use core::fmt;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Png,
    Wav,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG image"),
            Self::Wav => write!(f, "WAV sound"),
        }
    }
}

/// Startup asset failures.  All of them are fatal.
#[derive(Debug)]
pub enum AssetError {
    NotFound { path: PathBuf },
    Unreadable { path: PathBuf, source: io::Error },
    InvalidFormat {
        path: PathBuf,
        expected: AssetKind,
        reason: &'static str,
    },
}

impl AssetError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Unreadable { path, .. }
            | Self::InvalidFormat { path, .. } => path,
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "asset not found: {}", path.display()),
            Self::Unreadable { path, source } => {
                write!(f, "failed to read asset {}: {source}", path.display())
            }
            Self::InvalidFormat {
                path,
                expected,
                reason,
            } => write!(f, "{} is not a valid {expected}: {reason}", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}
