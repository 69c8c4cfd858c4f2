use opencv::{core, prelude::*, videoio};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use signprep::{
    check_video, is_valid_video, labels_to_number_at, load_labels, videos_to_dict,
    videos_to_dict_with, DatasetConfig, LabelMap, VideoIndex,
};

/// Writes a short 64x48 MJPEG clip with OpenCV's built-in encoder.
fn write_clip(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path.parent().unwrap())?;
    let fourcc = videoio::VideoWriter::fourcc('M', 'J', 'P', 'G')?;
    let mut writer = videoio::VideoWriter::new_with_backend(
        path.to_str().unwrap(),
        videoio::CAP_OPENCV_MJPEG,
        fourcc,
        10.0,
        core::Size::new(64, 48),
        true,
    )?;
    assert!(writer.is_opened()?, "MJPEG writer failed to open {}", path.display());

    let frame = core::Mat::zeros(48, 64, core::CV_8UC3)?.to_mat()?;
    for _ in 0..5 {
        writer.write(&frame)?;
    }
    writer.release()?;
    Ok(())
}

fn touch(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(path, b"")?;
    Ok(())
}

#[test]
fn decodable_clip_passes_the_probe() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let clip = dir.path().join("clip.avi");
    write_clip(&clip)?;

    let frame = check_video(&clip)?;
    assert_eq!((frame.width, frame.height), (64, 48));
    assert!(frame.channels > 0);
    assert_eq!(frame.size(), 64 * 48 * frame.channels as u64);
    assert!(is_valid_video(&clip));
    Ok(())
}

#[test]
fn index_keeps_only_valid_videos_with_known_labels() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let root = dir.path().join("root");
    write_clip(&root.join("dog/a.avi"))?;
    touch(&root.join("cat/b.mov"))?;
    fs::write(root.join("dog/c.txt"), "not a video")?;
    write_clip(&root.join("bird/d.avi"))?;

    let labels: LabelMap = serde_json::from_str(r#"{"dog":0,"cat":1}"#)?;
    let videos = videos_to_dict(&root, &labels);

    let expected: VideoIndex = [(root.join("dog/a.avi"), 0)].into_iter().collect();
    assert_eq!(videos, expected);
    Ok(())
}

#[test]
fn valid_video_with_unlisted_extension_is_excluded() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    write_clip(&root.join("dog/a.avi"))?;
    fs::copy(root.join("dog/a.avi"), root.join("dog/b.AVI"))?;
    fs::copy(root.join("dog/a.avi"), root.join("dog/c.mkv"))?;

    let labels = LabelMap::from_ordered(["dog"]);
    let videos = videos_to_dict(root, &labels);
    assert_eq!(videos.keys().collect::<Vec<_>>(), vec![&root.join("dog/a.avi")]);

    let mp4_only = DatasetConfig {
        video_extensions: vec![".mp4".to_string()],
        ..DatasetConfig::default()
    };
    assert!(videos_to_dict_with(root, &labels, &mp4_only).is_empty());
    Ok(())
}

#[test]
fn nested_videos_use_their_immediate_parent() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    write_clip(&root.join("signer1/cat/a.avi"))?;
    write_clip(&root.join("cat/signer2/b.avi"))?;

    let labels = LabelMap::from_ordered(["dog", "cat"]);
    let videos = videos_to_dict(root, &labels);

    let expected: VideoIndex = [(root.join("signer1/cat/a.avi"), 1)].into_iter().collect();
    assert_eq!(videos, expected);
    Ok(())
}

#[test]
fn directory_labels_feed_the_indexer() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let root = dir.path().join("videos");
    write_clip(&root.join("hello/1.avi"))?;
    write_clip(&root.join("thanks/2.avi"))?;
    write_clip(&root.join("bye/3.avi"))?;
    let labels_file: PathBuf = dir.path().join("labels.json");

    let labels = labels_to_number_at(&root, &labels_file)?;
    assert_eq!(load_labels(&labels_file)?, labels);

    let videos = videos_to_dict(&root, &labels);
    assert_eq!(videos.len(), 3);
    assert_eq!(videos[&root.join("bye/3.avi")], 0);
    assert_eq!(videos[&root.join("hello/1.avi")], 1);
    assert_eq!(videos[&root.join("thanks/2.avi")], 2);
    Ok(())
}

#[test]
fn empty_tree_gives_empty_index() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    fs::create_dir(dir.path().join("dog"))?;
    let labels = LabelMap::from_ordered(["dog"]);
    assert!(videos_to_dict(dir.path(), &labels).is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_video_files_are_indexed() -> Result<(), Box<dyn Error>> {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir()?;
    let store = dir.path().join("store");
    let root = dir.path().join("root");
    write_clip(&store.join("a.avi"))?;
    fs::create_dir_all(root.join("dog"))?;
    symlink(store.join("a.avi"), root.join("dog/a.avi"))?;
    // A symlinked class directory is not descended into.
    write_clip(&store.join("cat/b.avi"))?;
    symlink(store.join("cat"), root.join("cat"))?;

    let labels = LabelMap::from_ordered(["dog", "cat"]);
    let videos = videos_to_dict(&root, &labels);

    let expected: VideoIndex = [(root.join("dog/a.avi"), 0)].into_iter().collect();
    assert_eq!(videos, expected);
    Ok(())
}
