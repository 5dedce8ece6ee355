//! Checkpoint store and best-controller artifact persistence.
//!
//! Population snapshots are JSON files named `checkpoint-<index>.json` in a
//! caller-supplied directory, where the index is a monotonically increasing
//! generation count. Resume picks the numerically highest index; finding no
//! checkpoint at all is the documented fresh-start path, not an error. The
//! population payload is opaque to this module: anything serde can round-trip.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "checkpoint-";
const SUFFIX: &str = ".json";

/// A persisted population snapshot.
///
/// Carries the configuration it was trained under alongside the payload, so
/// a resume can tell stale persisted settings from current ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    /// Generation index, embedded in the checkpoint file name.
    pub generation: u32,
    /// Stopping threshold the training run was configured with at save time.
    pub fitness_threshold: f32,
    /// The caller's population state. Never inspected here.
    pub population: T,
}

/// Current-configuration overlay applied after a resume.
///
/// Persisted configuration is stale whenever the configuration changed
/// since the checkpoint was written; the overlay is the explicit merge step
/// that replaces it, field by field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    /// Replacement stopping threshold, if the current config sets one.
    pub fitness_threshold: Option<f32>,
}

impl<T> Snapshot<T> {
    /// Overrides persisted settings with the current configuration.
    pub fn apply_overlay(&mut self, overlay: &Overlay) {
        if let Some(threshold) = overlay.fitness_threshold {
            self.fitness_threshold = threshold;
        }
    }
}

/// Returns the path a checkpoint with the given index is stored at.
pub fn checkpoint_path(dir: &Path, generation: u32) -> PathBuf {
    dir.join(format!("{PREFIX}{generation}{SUFFIX}"))
}

/// Writes a snapshot to its indexed file, creating the directory if needed.
pub fn save_checkpoint<T: Serialize>(
    dir: &Path,
    snapshot: &Snapshot<T>,
) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path = checkpoint_path(dir, snapshot.generation);
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Loads one snapshot from a checkpoint file.
pub fn load_checkpoint<T: DeserializeOwned>(path: &Path) -> Result<Snapshot<T>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let snapshot = serde_json::from_str(&json)?;
    Ok(snapshot)
}

/// Lists every checkpoint in the directory, sorted by ascending index.
///
/// Indices compare numerically, so `checkpoint-10` outranks `checkpoint-9`.
/// Files that do not match the naming scheme are ignored; a missing
/// directory yields an empty list.
pub fn list_checkpoints(dir: &Path) -> Result<Vec<(u32, PathBuf)>, Box<dyn Error>> {
    let mut found = Vec::new();
    if !dir.exists() {
        return Ok(found);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let index = name
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .and_then(|rest| rest.parse::<u32>().ok());
        if let Some(index) = index {
            found.push((index, path));
        }
    }

    found.sort_by_key(|&(index, _)| index);
    Ok(found)
}

/// Restores the snapshot with the highest generation index, if any exists.
pub fn resume_latest<T: DeserializeOwned>(
    dir: &Path,
) -> Result<Option<Snapshot<T>>, Box<dyn Error>> {
    match list_checkpoints(dir)?.pop() {
        Some((_, path)) => Ok(Some(load_checkpoint(&path)?)),
        None => Ok(None),
    }
}

/// Writes the winning controller artifact.
pub fn save_best<T: Serialize>(path: &Path, best: &T) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(best)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads the winning controller artifact back for replay.
///
/// A missing artifact is a hard error: there is no reasonable continuation
/// without a trained controller.
pub fn load_best<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    let best = serde_json::from_str(&json)?;
    Ok(best)
}
