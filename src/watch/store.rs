//! Event-sourced registry of watched layer images.
//!
//! The watcher callbacks only emit discrete events; this store is the one
//! place that folds them into state. Files named `<stem>.top.<ext>` and
//! `<stem>.bottom.<ext>` pair up by stem, and a pair becomes ready for
//! (re)composition whenever an event completes or touches it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Which layer of a pair a file provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    Top,
    Bottom,
}

/// A discrete filesystem event, already stripped of watcher specifics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetEvent {
    Added(PathBuf),
    Modified(PathBuf),
    Removed(PathBuf),
}

/// The store's reaction to an applied event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetChange {
    /// Both layers of this stem are present; compose (or recompose) it.
    PairReady(String),
    /// The event touched a recognized layer but its counterpart is missing.
    Waiting(String),
    /// A layer disappeared and the stem is no longer composable.
    Dropped(String),
    /// The event did not concern a recognizable layer file.
    Ignored,
}

#[derive(Debug, Default, Clone)]
struct PairEntry {
    top: Option<PathBuf>,
    bottom: Option<PathBuf>,
}

/// Classify a path as a layer file: `<stem>.top.<ext>` or
/// `<stem>.bottom.<ext>` with a decodable extension.
pub fn classify(path: &Path) -> Option<(String, LayerRole)> {
    if !crate::images::is_supported(path) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;

    if let Some(base) = stem.strip_suffix(".top") {
        if !base.is_empty() {
            return Some((base.to_string(), LayerRole::Top));
        }
    }
    if let Some(base) = stem.strip_suffix(".bottom") {
        if !base.is_empty() {
            return Some((base.to_string(), LayerRole::Bottom));
        }
    }
    None
}

/// Mapping from pair stem to the layer files seen so far.
#[derive(Debug, Default)]
pub struct ImageSet {
    entries: BTreeMap<String, PairEntry>,
}

impl ImageSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stems with at least one layer present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no layers are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the layer paths for a complete pair.
    pub fn pair(&self, stem: &str) -> Option<(&Path, &Path)> {
        let entry = self.entries.get(stem)?;
        match (&entry.top, &entry.bottom) {
            (Some(t), Some(b)) => Some((t.as_path(), b.as_path())),
            _ => None,
        }
    }

    /// Stems whose pairs are currently complete.
    pub fn ready_stems(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, e)| e.top.is_some() && e.bottom.is_some())
            .map(|(stem, _)| stem.clone())
            .collect()
    }

    /// Fold one event into the set and report what changed.
    pub fn apply(&mut self, event: SetEvent) -> SetChange {
        match event {
            SetEvent::Added(path) | SetEvent::Modified(path) => {
                let Some((stem, role)) = classify(&path) else {
                    return SetChange::Ignored;
                };
                let entry = self.entries.entry(stem.clone()).or_default();
                match role {
                    LayerRole::Top => entry.top = Some(path),
                    LayerRole::Bottom => entry.bottom = Some(path),
                }
                if entry.top.is_some() && entry.bottom.is_some() {
                    SetChange::PairReady(stem)
                } else {
                    SetChange::Waiting(stem)
                }
            }
            SetEvent::Removed(path) => {
                let Some((stem, role)) = classify(&path) else {
                    return SetChange::Ignored;
                };
                let Some(entry) = self.entries.get_mut(&stem) else {
                    return SetChange::Ignored;
                };
                match role {
                    LayerRole::Top => entry.top = None,
                    LayerRole::Bottom => entry.bottom = None,
                }
                if entry.top.is_none() && entry.bottom.is_none() {
                    self.entries.remove(&stem);
                }
                SetChange::Dropped(stem)
            }
        }
    }
}
