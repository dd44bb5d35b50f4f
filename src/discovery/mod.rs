//! Entry-file discovery.
//!
//! This module resolves the set of entry files a function app will hand to
//! the serverless host:
//! - v3 apps declare one `function.json` manifest per function, each naming
//!   its own entry script
//! - v4 apps declare a single glob in the `main` field of `package.json`
//!
//! The two formats are structurally incompatible, so each gets its own
//! discoverer; the caller picks one via [`ProgrammingModel`].

pub mod manifest;
pub mod package;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::ProgrammingModel;

pub use manifest::ManifestDiscovery;
pub use package::GlobDiscovery;

/// Produces the set of entry files for one function app.
///
/// Consumers (the injector) depend only on this contract, never on which
/// strategy ran. Returned paths are resolved against `app_root`; order is
/// unspecified and duplicates are not removed.
#[allow(async_fn_in_trait)]
pub trait EntryDiscoverer {
    async fn discover(&self, app_root: &Path) -> Result<Vec<PathBuf>>;
}

/// Runs the discovery strategy matching the app's programming model.
pub async fn discover_entry_files(
    app_root: &Path,
    model: ProgrammingModel,
) -> Result<Vec<PathBuf>> {
    match model {
        ProgrammingModel::V3 => ManifestDiscovery::new().discover(app_root).await,
        ProgrammingModel::V4 => GlobDiscovery::new().discover(app_root).await,
    }
}
