//! Directory watching with live recomposition.
//!
//! Watches a directory for `<stem>.top.*` / `<stem>.bottom.*` layer files
//! and keeps a composed `<stem>.png` up to date for every complete pair.
//! Filesystem callbacks are reduced to [`SetEvent`]s; the [`ImageSet`]
//! store owns all state.

mod store;

pub use store::{classify, ImageSet, LayerRole, SetChange, SetEvent};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{EventKind, RecursiveMode, Watcher};
use walkdir::WalkDir;

use crate::batch::compose_pair;
use crate::error::{MirageError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};

fn watch_error(e: notify::Error) -> MirageError {
    MirageError::Watch {
        message: e.to_string(),
    }
}

/// Translate one watcher notification into store events.
fn translate(event: &notify::Event) -> Vec<SetEvent> {
    let wrap: Option<fn(PathBuf) -> SetEvent> = match event.kind {
        EventKind::Create(_) => Some(SetEvent::Added),
        EventKind::Modify(_) => Some(SetEvent::Modified),
        EventKind::Remove(_) => Some(SetEvent::Removed),
        _ => None,
    };
    match wrap {
        Some(wrap) => event.paths.iter().cloned().map(wrap).collect(),
        None => vec![],
    }
}

/// Fold an event into the set, recomposing when a pair becomes ready.
fn handle_event(
    set: &mut ImageSet,
    event: SetEvent,
    out_dir: &Path,
    printer: &Printer,
) {
    match set.apply(event) {
        SetChange::PairReady(stem) => {
            let Some((top, bottom)) = set.pair(&stem) else {
                return;
            };
            let out = out_dir.join(format!("{}.png", stem));
            match compose_pair(top, bottom, &out) {
                Ok(()) => printer.status("Writing", &display_path(&out)),
                // keep watching; a half-written source often fails to
                // decode and succeeds on the following event
                Err(e) => printer.warning("Failed", &format!("{}: {}", stem, e)),
            }
        }
        SetChange::Waiting(stem) => printer.info("Waiting", &stem),
        SetChange::Dropped(stem) => printer.info("Dropped", &stem),
        SetChange::Ignored => {}
    }
}

/// Watch a directory, composing every complete layer pair as it changes.
///
/// Performs an initial scan so pre-existing pairs compose immediately,
/// then blocks on watcher events until the process is interrupted.
pub fn run_watch(
    dir: &Path,
    out_dir: &Path,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|e| MirageError::Io {
        path: out_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut set = ImageSet::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
    {
        let path = entry.path().to_path_buf();
        if manifest.is_excluded(&path) {
            continue;
        }
        handle_event(&mut set, SetEvent::Added(path), out_dir, printer);
    }

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    watcher
        .watch(dir, RecursiveMode::Recursive)
        .map_err(watch_error)?;
    printer.info("Watching", &display_path(dir));

    for result in rx {
        let event = result.map_err(watch_error)?;
        for set_event in translate(&event) {
            handle_event(&mut set, set_event, out_dir, printer);
        }
    }

    Ok(())
}
