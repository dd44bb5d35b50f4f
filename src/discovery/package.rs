//! Current-model (v4) discovery via the package descriptor's entry glob.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FuncPackError, Result};

use super::EntryDiscoverer;

/// Discovers entry files by expanding the glob in the `main` field of
/// `package.json` against the filesystem.
pub struct GlobDiscovery;

impl GlobDiscovery {
    pub fn new() -> Self {
        Self
    }

    /// Joins `root` and `pattern` with forward slashes.
    ///
    /// Module globs are written POSIX-style; normalizing the root keeps the
    /// combined pattern valid on hosts that use backslash separators.
    fn posix_join(root: &Path, pattern: &str) -> String {
        let root = root.to_string_lossy().replace('\\', "/");
        format!("{}/{}", root.trim_end_matches('/'), pattern)
    }
}

impl Default for GlobDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDiscoverer for GlobDiscovery {
    async fn discover(&self, app_root: &Path) -> Result<Vec<PathBuf>> {
        let descriptor_path = app_root.join("package.json");
        let content = tokio::fs::read_to_string(&descriptor_path).await?;

        let descriptor: PackageDescriptor = serde_json::from_str(&content).map_err(|e| {
            FuncPackError::Parse(format!("Invalid {}: {}", descriptor_path.display(), e))
        })?;

        let pattern = descriptor.main.ok_or_else(|| {
            FuncPackError::MissingField(format!("`main` in {}", descriptor_path.display()))
        })?;

        let full_pattern = Self::posix_join(app_root, &pattern);
        tracing::debug!("Expanding entry glob {}", full_pattern);

        // Zero matches is a valid result: an app with no entry files yet.
        let mut entries = Vec::new();
        for matched in glob::glob(&full_pattern)? {
            entries.push(matched?);
        }

        Ok(entries)
    }
}

/// Minimal representation of package.json
#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    main: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let mut file = File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_discover_expands_main_glob() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "package.json", r#"{ "main": "dist/*.js" }"#);
        create_file(temp_dir.path(), "dist/hello.js", "");
        create_file(temp_dir.path(), "dist/goodbye.js", "");
        create_file(temp_dir.path(), "dist/readme.md", "");
        create_file(temp_dir.path(), "src/hello.js", "");

        let mut entries = GlobDiscovery::new().discover(temp_dir.path()).await.unwrap();
        entries.sort();

        assert_eq!(
            entries,
            vec![
                temp_dir.path().join("dist/goodbye.js"),
                temp_dir.path().join("dist/hello.js"),
            ]
        );
    }

    #[tokio::test]
    async fn test_discover_recursive_glob() {
        let temp_dir = TempDir::new().unwrap();
        create_file(
            temp_dir.path(),
            "package.json",
            r#"{ "main": "dist/**/index.js" }"#,
        );
        create_file(temp_dir.path(), "dist/hello/index.js", "");
        create_file(temp_dir.path(), "dist/nested/goodbye/index.js", "");

        let entries = GlobDiscovery::new().discover(temp_dir.path()).await.unwrap();

        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_discover_zero_matches_is_empty_not_error() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "package.json", r#"{ "main": "dist/*.js" }"#);

        let entries = GlobDiscovery::new().discover(temp_dir.path()).await.unwrap();

        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_missing_descriptor_is_fatal() {
        let temp_dir = TempDir::new().unwrap();

        let result = GlobDiscovery::new().discover(temp_dir.path()).await;

        assert!(matches!(result, Err(FuncPackError::Io(_))));
    }

    #[tokio::test]
    async fn test_malformed_descriptor_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "package.json", "not json at all");

        let result = GlobDiscovery::new().discover(temp_dir.path()).await;

        assert!(matches!(result, Err(FuncPackError::Parse(_))));
    }

    #[tokio::test]
    async fn test_missing_main_field_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "package.json", r#"{ "name": "my-app" }"#);

        let result = GlobDiscovery::new().discover(temp_dir.path()).await;

        match result {
            Err(FuncPackError::MissingField(field)) => assert!(field.contains("main")),
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_posix_join_normalizes_backslashes() {
        let joined = GlobDiscovery::posix_join(Path::new("apps/my-app"), "dist/*.js");
        assert_eq!(joined, "apps/my-app/dist/*.js");

        let joined = GlobDiscovery::posix_join(Path::new(r"apps\my-app"), "dist/*.js");
        assert_eq!(joined, "apps/my-app/dist/*.js");
    }
}
