pub mod frame_data;
pub mod video;

pub use frame_data::FrameInfo;
pub use video::{check_video, is_valid_video, InvalidVideo};
