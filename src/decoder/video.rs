use opencv::{prelude::*, core, videoio};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use super::frame_data::FrameInfo;

/// Why a file failed the decode-one-frame probe.
#[derive(Debug, Error)]
pub enum InvalidVideo {
    #[error("file does not exist")]
    Missing,

    #[error("path is not a regular file")]
    NotAFile,

    #[error("path is not valid UTF-8")]
    NonUtf8Path,

    #[error("backend could not open the file")]
    OpenFailed,

    #[error("no frame could be decoded")]
    NoFrame,

    #[error("decoded frame is empty ({width}x{height}x{channels})")]
    EmptyFrame { width: i32, height: i32, channels: i32 },

    #[error("decoder error: {0}")]
    Backend(#[from] opencv::Error),
}

/// Owns an open capture and releases it when dropped, on every exit path.
struct Capture {
    inner: videoio::VideoCapture,
    path: PathBuf,
}

impl Capture {
    fn open(path: &Path, name: &str) -> Result<Self, InvalidVideo> {
        // CAP_ANY lets OpenCV pick whichever backend can read the container
        let inner = videoio::VideoCapture::from_file(name, videoio::CAP_ANY)?;
        Ok(Self { inner, path: path.to_path_buf() })
    }

    fn first_frame(&mut self) -> Result<FrameInfo, InvalidVideo> {
        if !self.inner.is_opened()? {
            return Err(InvalidVideo::OpenFailed);
        }

        let mut frame = core::Mat::default();
        if !self.inner.read(&mut frame)? {
            return Err(InvalidVideo::NoFrame);
        }

        let (width, height, channels) = (frame.cols(), frame.rows(), frame.channels());
        let info = FrameInfo::new(
            u32::try_from(width).unwrap_or(0),
            u32::try_from(height).unwrap_or(0),
            u32::try_from(channels).unwrap_or(0),
        );
        if frame.empty() || info.size() == 0 {
            return Err(InvalidVideo::EmptyFrame { width, height, channels });
        }

        Ok(info)
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        if let Err(e) = self.inner.release() {
            debug!("failed to release capture for {}: {}", self.path.display(), e);
        }
    }
}

/// Opens `path` and decodes exactly one frame.
///
/// Returns the first frame's shape when the file is a readable video. Every
/// failure, including errors raised by OpenCV itself, comes back as an
/// [`InvalidVideo`] reason; nothing panics.
pub fn check_video(path: impl AsRef<Path>) -> Result<FrameInfo, InvalidVideo> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InvalidVideo::Missing);
    }
    if !path.is_file() {
        return Err(InvalidVideo::NotAFile);
    }
    let name = path.to_str().ok_or(InvalidVideo::NonUtf8Path)?;

    let mut capture = Capture::open(path, name)?;
    capture.first_frame()
}

/// Boolean form of [`check_video`]; failures are logged as warnings.
pub fn is_valid_video(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match check_video(path) {
        Ok(info) => {
            debug!("{}: first frame {}x{}x{}", path.display(), info.width, info.height, info.channels);
            true
        }
        Err(reason) => {
            warn!("invalid video {}: {}", path.display(), reason);
            false
        }
    }
}
