//! Whole-image composition over files and directories.
//!
//! `make` accepts any mix of files and directories for its two inputs.
//! A directory input fans out over every decodable image it holds; two
//! directories pair images by file name.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::compose::compose_classic;
use crate::error::{MirageError, Result};
use crate::images::{ensure_png, load_gray, save_dual};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};

/// Compose one top/bottom pair and write the result.
pub(crate) fn compose_pair(top: &Path, bottom: &Path, out: &Path) -> Result<()> {
    let top_img = load_gray(top)?;
    let bottom_img = load_gray(bottom)?;
    let composed = compose_classic(&top_img, &bottom_img)?;

    save_dual(&composed, out)
}

fn compose_one(top: &Path, bottom: &Path, out: &Path, printer: &Printer) -> Result<()> {
    compose_pair(top, bottom, out)?;
    printer.status("Writing", &display_path(out));
    Ok(())
}

/// List decodable images directly inside a directory, sorted by name.
fn list_images(dir: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut images: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| manifest.accepts_extension(p) && !manifest.is_excluded(p))
        .collect();
    images.sort();
    images
}

/// Output file name for a batch entry: the source stem with `.png`.
fn batch_name(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("composed");
    PathBuf::from(format!("{}.png", stem))
}

/// Default sibling output path for a single file pair.
fn default_single_output(top: &Path) -> PathBuf {
    let stem = top
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("composed");
    top.with_file_name(format!("{}_output.png", stem))
}

/// Default output directory name for batch modes.
fn default_batch_dir(dir: &Path) -> PathBuf {
    let name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("batch");
    PathBuf::from(format!("output_{}", name))
}

fn resolve_batch_dir(
    output: Option<&Path>,
    manifest: &Manifest,
    fallback_source: &Path,
) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .or_else(|| manifest.output.clone())
        .unwrap_or_else(|| default_batch_dir(fallback_source))
}

fn prepare_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| MirageError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}

/// Run whole-image composition over the four file/directory input modes.
///
/// Returns the number of images written.
pub fn run_make(
    top: &Path,
    bottom: &Path,
    output: Option<&Path>,
    manifest: &Manifest,
    printer: &Printer,
) -> Result<usize> {
    let count = match (top.is_file(), bottom.is_file(), top.is_dir(), bottom.is_dir()) {
        (true, true, _, _) => {
            let out = output
                .map(ensure_png)
                .unwrap_or_else(|| default_single_output(top));
            compose_one(top, bottom, &out, printer)?;
            1
        }
        (true, _, _, true) => {
            let out_dir = resolve_batch_dir(output, manifest, bottom);
            prepare_dir(&out_dir)?;
            let mut n = 0;
            for entry in list_images(bottom, manifest) {
                compose_one(top, &entry, &out_dir.join(batch_name(&entry)), printer)?;
                n += 1;
            }
            n
        }
        (_, true, true, _) => {
            let out_dir = resolve_batch_dir(output, manifest, top);
            prepare_dir(&out_dir)?;
            let mut n = 0;
            for entry in list_images(top, manifest) {
                compose_one(&entry, bottom, &out_dir.join(batch_name(&entry)), printer)?;
                n += 1;
            }
            n
        }
        (_, _, true, true) => {
            let out_dir = resolve_batch_dir(output, manifest, top);
            prepare_dir(&out_dir)?;
            let mut n = 0;
            for entry in list_images(top, manifest) {
                let counterpart = bottom.join(entry.file_name().unwrap_or_default());
                if !counterpart.is_file() {
                    printer.warning("Skipping", &display_path(&entry));
                    continue;
                }
                compose_one(&entry, &counterpart, &out_dir.join(batch_name(&entry)), printer)?;
                n += 1;
            }
            n
        }
        _ => {
            return Err(MirageError::Build {
                message: format!(
                    "Inputs not found: {} / {}",
                    top.display(),
                    bottom.display()
                ),
                help: Some("Both inputs must be existing files or directories".to_string()),
            })
        }
    };

    printer.status("Finished", &plural(count, "image", "images"));
    Ok(count)
}
