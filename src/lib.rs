//! Label discovery and video indexing for sign-language classification datasets.
//!
//! Labels come either from the class subdirectories of a dataset root
//! ([`labels_to_number`]) or from the fixed sign vocabulary ([`get_labels`]).
//! [`videos_to_dict`] then walks a video tree and maps each readable video to
//! the index of the directory it sits in.

pub mod config;
pub mod core;
pub mod decoder;
pub mod logging;

pub use crate::config::DatasetConfig;
pub use crate::core::indexer::{videos_to_dict, videos_to_dict_with, VideoIndex};
pub use crate::core::labels::{
    labels_to_number, labels_to_number_at, load_labels, save_labels, LabelError, LabelMap,
    LABELS_FILE,
};
pub use crate::core::vocabulary::{get_labels, VOCABULARY, VOCABULARY_VERSION};
pub use crate::decoder::{check_video, is_valid_video, FrameInfo, InvalidVideo};
