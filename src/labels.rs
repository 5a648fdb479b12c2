//! Label table management module
//!
//! Handles loading and querying the display labels for each strength level.
//! Labels live in a resource file so the meter can speak the host UI's
//! language without recompiling.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use crate::types::StrengthLevel;

static LOADED_LABELS: RwLock<Option<LabelTable>> = RwLock::new(None);

const LEVEL_COUNT: usize = StrengthLevel::MAX.value() as usize + 1;

const ENGLISH: [&str; LEVEL_COUNT] = ["very weak", "weak", "medium", "strong", "very strong"];

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Label file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read label file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Label file is empty")]
    EmptyFile,
    #[error("Malformed label entry on line {line}: {content:?}")]
    Malformed { line: usize, content: String },
    #[error("Label for level {0} is defined more than once")]
    DuplicateLevel(u8),
    #[error("Label for level {0} is missing")]
    MissingLevel(u8),
}

/// One display label per strength level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: [String; LEVEL_COUNT],
}

impl LabelTable {
    /// Built-in English labels.
    pub fn english() -> Self {
        LabelTable {
            labels: ENGLISH.map(String::from),
        }
    }

    pub fn label(&self, level: StrengthLevel) -> &str {
        &self.labels[level.value() as usize]
    }

    /// Parses `<level> = <label>` lines.
    ///
    /// Blank lines and `#` comments are skipped. All five levels must be
    /// present exactly once.
    pub fn parse(content: &str) -> Result<Self, LabelError> {
        if content.trim().is_empty() {
            return Err(LabelError::EmptyFile);
        }

        let mut slots: [Option<String>; LEVEL_COUNT] = Default::default();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let malformed = || LabelError::Malformed {
                line: idx + 1,
                content: raw.to_string(),
            };

            let (key, label) = line.split_once('=').ok_or_else(malformed)?;
            let level = match key.trim().as_bytes() {
                [digit @ b'0'..=b'4'] => digit - b'0',
                _ => return Err(malformed()),
            };
            let label = label.trim();
            if label.is_empty() {
                return Err(malformed());
            }

            let slot = &mut slots[level as usize];
            if slot.is_some() {
                return Err(LabelError::DuplicateLevel(level));
            }
            *slot = Some(label.to_string());
        }

        let mut labels: [String; LEVEL_COUNT] = Default::default();
        for (level, slot) in slots.into_iter().enumerate() {
            labels[level] = slot.ok_or(LabelError::MissingLevel(level as u8))?;
        }

        Ok(LabelTable { labels })
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::english()
    }
}

/// Returns the label file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_LABELS_PATH`
/// 2. Default path `./assets/labels.txt`
pub fn get_labels_path() -> PathBuf {
    std::env::var("PWD_METER_LABELS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/labels.txt"))
}

/// Initializes the process-wide label table from the configured file.
///
/// Set `PWD_METER_LABELS_PATH` to pick a locale file, e.g.
/// `assets/labels/zh-CN.txt`.
///
/// # Errors
///
/// Returns error if the file is missing, unreadable, empty or malformed.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_METER_LABELS_PATH", "assets/labels/zh-CN.txt"); }
/// pwd_meter::init_labels()?;
/// ```
pub fn init_labels() -> Result<usize, LabelError> {
    let path = get_labels_path();
    init_labels_from_path(&path)
}

/// Initializes the process-wide label table from a specific file path.
///
/// Idempotent: once a table is loaded, later calls return immediately
/// without touching the file system.
pub fn init_labels_from_path<P: AsRef<Path>>(path: P) -> Result<usize, LabelError> {
    {
        let guard = LOADED_LABELS.read().unwrap_or_else(PoisonError::into_inner);
        if guard.is_some() {
            return Ok(LEVEL_COUNT);
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Label initialization FAILED: FileNotFound {}", path.display());
        return Err(LabelError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let table = LabelTable::parse(&content).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Label initialization FAILED for {}: {}", path.display(), _e);
    })?;

    {
        let mut guard = LOADED_LABELS.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(table);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Label table initialized from {:?}", path);

    Ok(LEVEL_COUNT)
}

/// Returns the loaded label table, or the English one if none is loaded.
pub fn current_labels() -> LabelTable {
    let guard = LOADED_LABELS.read().unwrap_or_else(PoisonError::into_inner);
    guard.clone().unwrap_or_default()
}

/// Resets the label table for testing purposes.
#[cfg(test)]
pub fn reset_labels_for_testing() {
    let mut guard = LOADED_LABELS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
