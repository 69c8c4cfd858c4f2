use serde::Serialize;

/// Shape of the first decoded frame of a video
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct FrameInfo {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
}

impl FrameInfo {
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        Self { width, height, channels }
    }

    /// Number of samples in the frame (width * height * channels)
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.channels as u64
    }
}
