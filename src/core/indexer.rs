use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::labels::LabelMap;
use crate::config::DatasetConfig;
use crate::decoder::is_valid_video;

/// Video path -> class index.
pub type VideoIndex = BTreeMap<PathBuf, usize>;

/// Walks `root` and maps every readable video to the index of its parent
/// directory's label, using the default extension set.
pub fn videos_to_dict(root: impl AsRef<Path>, labels: &LabelMap) -> VideoIndex {
    videos_to_dict_with(root, labels, &DatasetConfig::default())
}

/// Configurable form of [`videos_to_dict`].
///
/// Files with an unrecognized extension or an unknown parent label are
/// skipped silently; files that fail the decode probe are skipped with a
/// warning. Keys are `root` joined with the file's relative path.
pub fn videos_to_dict_with(
    root: impl AsRef<Path>,
    labels: &LabelMap,
    config: &DatasetConfig,
) -> VideoIndex {
    let root = root.as_ref();
    let mut videos = VideoIndex::new();
    let mut seen = 0usize;

    for entry in WalkDir::new(root).follow_links(config.follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        // Symlinked directories are not descended into, but symlinks to files count.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let is_video = entry
            .file_name()
            .to_str()
            .map_or(false, |name| config.is_video_name(name));
        if !is_video {
            continue;
        }
        seen += 1;

        let label = entry
            .path()
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str());
        let index = match label.and_then(|label| labels.get(label)) {
            Some(index) => index,
            None => {
                debug!("no label for {}", entry.path().display());
                continue;
            }
        };

        if !is_valid_video(entry.path()) {
            continue;
        }
        videos.insert(entry.into_path(), index);
    }

    debug!(
        "indexed {} of {} video files under {}",
        videos.len(),
        seen,
        root.display()
    );
    videos
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn non_video_extensions_are_excluded() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("dog/clip.txt"));
        touch(&root.path().join("dog/clip.mkv"));
        touch(&root.path().join("dog/clip.MP4"));

        let labels = LabelMap::from_ordered(["dog"]);
        assert!(videos_to_dict(root.path(), &labels).is_empty());
    }

    #[test]
    fn invalid_videos_are_excluded() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("cat/b.mov"));
        fs::write(root.path().join("cat/c.mp4"), "plain text").unwrap();

        let labels = LabelMap::from_ordered(["cat"]);
        assert!(videos_to_dict(root.path(), &labels).is_empty());
    }

    #[test]
    fn missing_root_gives_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let labels = LabelMap::from_ordered(["dog"]);
        assert!(videos_to_dict(dir.path().join("missing"), &labels).is_empty());
    }
}
