//! Project manifest (mirage.yaml) parsing.
//!
//! The manifest is optional; when present in the working directory it
//! supplies defaults for batch output and watch-mode filtering.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MirageError, Result};

/// Project manifest loaded from mirage.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for batch and watch results.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Source extensions accepted during directory scans.
    /// Defaults to the built-in decodable set.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Patterns to exclude from directory scans.
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl Manifest {
    /// Load manifest from a mirage.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MirageError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string. An empty document is a valid,
    /// all-defaults manifest.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| MirageError::Build {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check mirage.yaml syntax".to_string()),
        })
    }

    /// Load `mirage.yaml` from the working directory when it exists,
    /// defaults otherwise.
    pub fn discover() -> Result<Self> {
        let path = Path::new("mirage.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check whether a file's extension is accepted as a source.
    pub fn accepts_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return crate::images::is_supported(path);
        }
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .is_some_and(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(&e)))
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching: a leading `*` matches a suffix, a
    /// trailing `/*` matches directory contents, anything else matches by
    /// containment.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }
}
