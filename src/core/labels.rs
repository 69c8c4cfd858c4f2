use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Well-known location of the persisted label file, relative to the working directory.
pub const LABELS_FILE: &str = "labels.json";

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("failed to read label root {path}: {source}")]
    ReadRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write label file {path}: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read label file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed label file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("labels {first:?} and {second:?} share index {index}")]
    DuplicateIndex {
        index: usize,
        first: String,
        second: String,
    },

    #[error("failed to encode labels: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Label name -> class index. Immutable once built.
///
/// Serializes as a flat JSON object, which is also the on-disk format of
/// [`LABELS_FILE`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap(BTreeMap<String, usize>);

impl LabelMap {
    /// Assigns each label its position in `labels`, starting at 0.
    pub fn from_ordered<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| (label.into(), i))
                .collect(),
        )
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.0.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in label order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.0.iter()
    }

    /// Labels sorted by their index.
    pub fn labels_by_index(&self) -> Vec<&str> {
        let mut labels: Vec<(&str, usize)> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        labels.sort_by_key(|(_, i)| *i);
        labels.into_iter().map(|(k, _)| k).collect()
    }

    fn check_unique_indices(&self) -> Result<(), LabelError> {
        let mut seen: HashMap<usize, &str> = HashMap::with_capacity(self.0.len());
        for (label, &index) in &self.0 {
            if let Some(first) = seen.insert(index, label) {
                return Err(LabelError::DuplicateIndex {
                    index,
                    first: first.to_string(),
                    second: label.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LabelMap {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds labels from the immediate subdirectories of `root` and persists them
/// to [`LABELS_FILE`] in the working directory.
pub fn labels_to_number(root: impl AsRef<Path>) -> Result<LabelMap, LabelError> {
    labels_to_number_at(root, LABELS_FILE)
}

/// Same as [`labels_to_number`] but writes the label file to `out`.
///
/// Directory names are sorted before indexing so the assignment is stable
/// across runs. The file is overwritten even when no subdirectory exists.
pub fn labels_to_number_at(
    root: impl AsRef<Path>,
    out: impl AsRef<Path>,
) -> Result<LabelMap, LabelError> {
    let root = root.as_ref();
    let read_err = |source| LabelError::ReadRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut classes = Vec::new();
    for entry in fs::read_dir(root).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_dir() {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => classes.push(name.to_string()),
            None => warn!("skipping class directory with non UTF-8 name: {}", path.display()),
        }
    }

    classes.sort();
    info!("Found classes: {:?}", classes);

    let labels = LabelMap::from_ordered(classes);
    save_labels(&labels, out)?;
    Ok(labels)
}

/// Writes `labels` to `out` in one shot, replacing any previous content.
pub fn save_labels(labels: &LabelMap, out: impl AsRef<Path>) -> Result<(), LabelError> {
    let out = out.as_ref();
    let json = serde_json::to_string(labels)?;
    fs::write(out, json).map_err(|source| LabelError::Persist {
        path: out.to_path_buf(),
        source,
    })
}

/// Reads a label file written by [`labels_to_number`].
pub fn load_labels(path: impl AsRef<Path>) -> Result<LabelMap, LabelError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| LabelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let labels: LabelMap = serde_json::from_str(&data).map_err(|source| LabelError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    labels.check_unique_indices()?;
    Ok(labels)
}
