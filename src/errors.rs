use std::io;
use std::path::{Path, PathBuf};

use custom_error::custom_error;

custom_error! {pub WavTextError
    SourceNotFound{path: PathBuf} = @{ format!("source file not found: {}", path.display()) },
    InvalidSample{index: usize, token: String} = @{ format!("invalid sample {:?} at position {}", token, index) },
    InvalidChannelLayout{samples: usize, channels: u16} = "{samples} samples cannot be split evenly into {channels} channels",
    UnsupportedAudioSpec{channels: u16, sample_rate: u32} = "cannot write 16 bit wav with {channels} channels at {sample_rate} Hz",
    NotText{path: PathBuf} = @{ format!("{} is not valid UTF-8 text", path.display()) },
    ProjectRootNotFound{start: PathBuf} = @{ format!("no .git directory found at or above {}", start.display()) },
    Codec{source: hound::Error} = "audio codec error",
    Io{source: io::Error} = "i/o error"
}

pub type Result<T> = std::result::Result<T, WavTextError>;

/// Map a failure to open `path` for reading into the error the caller sees.
///
/// A missing file becomes `SourceNotFound`; everything else stays an i/o error.
pub fn open_error(path: &Path, e: io::Error) -> WavTextError {
    if e.kind() == io::ErrorKind::NotFound {
        WavTextError::SourceNotFound {
            path: path.to_path_buf(),
        }
    } else {
        WavTextError::Io { source: e }
    }
}

/// Like `open_error`, but for files read as text: undecodable bytes are
/// reported as such instead of as a bare i/o failure.
pub fn read_text_error(path: &Path, e: io::Error) -> WavTextError {
    if e.kind() == io::ErrorKind::InvalidData {
        WavTextError::NotText {
            path: path.to_path_buf(),
        }
    } else {
        open_error(path, e)
    }
}

/// hound reports a missing file as an `IoError` wrapped in its own type.
pub fn codec_open_error(path: &Path, e: hound::Error) -> WavTextError {
    match e {
        hound::Error::IoError(io_err) => open_error(path, io_err),
        other => WavTextError::Codec { source: other },
    }
}
