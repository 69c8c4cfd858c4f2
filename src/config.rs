use std::path::PathBuf;

use crate::core::labels::LABELS_FILE;

/// Overrides the location of the persisted label file.
pub const LABELS_FILE_ENV: &str = "SIGNPREP_LABELS_FILE";

/// File-name suffixes recognized as videos. Matching is case-sensitive.
pub const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".avi", ".mov"];

/// Knobs shared by the resolvers and the dataset indexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    pub labels_file: PathBuf,
    pub video_extensions: Vec<String>,
    pub follow_links: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            labels_file: PathBuf::from(LABELS_FILE),
            video_extensions: VIDEO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_links: false,
        }
    }
}

impl DatasetConfig {
    /// Defaults, with the label file location taken from the environment when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = std::env::var_os(LABELS_FILE_ENV).filter(|v| !v.is_empty()) {
            config.labels_file = PathBuf::from(path);
        }
        config
    }

    pub fn is_video_name(&self, name: &str) -> bool {
        self.video_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}
