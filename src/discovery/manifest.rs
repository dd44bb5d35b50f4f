//! Legacy-model (v3) discovery via per-function manifests.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Deserialize;
use tokio::task::JoinSet;

use crate::error::{FuncPackError, Result};

use super::EntryDiscoverer;

/// Manifest file the v3 host expects next to each function.
const MANIFEST_NAME: &str = "function.json";

/// Discovers entry files by reading every `function.json` under the app
/// root and resolving its `scriptFile` against the manifest's directory.
pub struct ManifestDiscovery;

impl ManifestDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Finds every function manifest under `root`, skipping `node_modules`.
    ///
    /// Discovery runs over build output, so gitignore rules and hidden-file
    /// filtering are deliberately off.
    fn find_manifests(root: &Path) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .filter_entry(|entry| entry.file_name() != "node_modules")
            .build();

        let mut manifests = Vec::new();
        for entry in walker.flatten() {
            let path = entry.path();
            if path.is_file() && path.file_name().is_some_and(|n| n == MANIFEST_NAME) {
                manifests.push(path.to_path_buf());
            }
        }

        manifests
    }

    /// Reads one manifest and resolves the entry file it declares.
    async fn resolve_entry(manifest_path: PathBuf) -> Result<PathBuf> {
        let content = tokio::fs::read_to_string(&manifest_path).await?;

        let manifest: FunctionManifest = serde_json::from_str(&content).map_err(|e| {
            FuncPackError::Parse(format!("Invalid {}: {}", manifest_path.display(), e))
        })?;

        let script_file = manifest.script_file.ok_or_else(|| {
            FuncPackError::MissingField(format!("`scriptFile` in {}", manifest_path.display()))
        })?;

        // scriptFile is relative to the manifest's own directory.
        let dir = manifest_path.parent().unwrap_or(Path::new(""));
        Ok(dir.join(script_file))
    }
}

impl Default for ManifestDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDiscoverer for ManifestDiscovery {
    async fn discover(&self, app_root: &Path) -> Result<Vec<PathBuf>> {
        let manifests = Self::find_manifests(app_root);
        tracing::debug!(
            "Found {} function manifests under {}",
            manifests.len(),
            app_root.display()
        );

        // All manifests are read in flight at once; the first failure wins
        // and the whole discovery fails with it.
        let mut tasks = JoinSet::new();
        for manifest in manifests {
            tasks.spawn(Self::resolve_entry(manifest));
        }

        let mut entries = Vec::new();
        while let Some(resolved) = tasks.join_next().await {
            entries.push(resolved??);
        }

        Ok(entries)
    }
}

/// Minimal representation of function.json
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FunctionManifest {
    script_file: Option<String>,
}
