//! Path-registration injection.
//!
//! The build emits a `_registerPaths.js` shim whose side effect wires up
//! module-path aliasing. The host loads each entry file directly, so every
//! entry file must load the shim as its very first statement. This module
//! rewrites discovered entry files to prepend that load statement, with the
//! shim referenced by a forward-slash relative path.

use std::path::{Component, Path, PathBuf};

use tokio::task::JoinSet;

use crate::discovery::discover_entry_files;
use crate::error::{FuncPackError, Result};
use crate::model::{ModuleKind, ProgrammingModel, REGISTRATION_FILE_NAME};

/// Rewrites entry files so their first statement loads the registration
/// shim. The shim path and module kind are fixed per invocation and shared
/// read-only by every file task.
pub struct RegistrationInjector {
    register_paths_file: PathBuf,
    module_kind: ModuleKind,
}

impl RegistrationInjector {
    /// The shim lives at `output_path/app_root/_registerPaths.js`. It is
    /// referenced here, never created or checked for existence.
    ///
    /// `output_path` and `app_root` are workspace-relative, the way the
    /// packaging pipeline invokes this from the workspace root; the shim
    /// path must share a base with the entry paths handed to [`inject`]
    /// for the emitted relative specifiers to resolve.
    ///
    /// [`inject`]: RegistrationInjector::inject
    pub fn new(output_path: &Path, app_root: &Path, module_kind: ModuleKind) -> Self {
        let register_paths_file = output_path
            .join(app_root)
            .join(format!("{}.js", REGISTRATION_FILE_NAME));

        Self {
            register_paths_file,
            module_kind,
        }
    }

    /// Prepends the load statement to every entry file, all rewrites in
    /// flight at once.
    ///
    /// The first failure observed aborts the batch; rewrites that already
    /// completed are not rolled back. Re-running prepends a second header:
    /// there is no idempotency guard.
    pub async fn inject(&self, entry_files: Vec<PathBuf>) -> Result<()> {
        let mut tasks = JoinSet::new();
        for file in entry_files {
            let header = self.header_for(&file);
            tasks.spawn(async move {
                let content = tokio::fs::read_to_string(&file).await?;
                tokio::fs::write(&file, format!("{}{}", header, content)).await?;
                Ok::<_, FuncPackError>(())
            });
        }

        while let Some(result) = tasks.join_next().await {
            result??;
        }

        Ok(())
    }

    /// Builds the load statement for one entry file, newline included.
    fn header_for(&self, entry_file: &Path) -> String {
        let entry_dir = entry_file.parent().unwrap_or(Path::new(""));
        let relative = relative_path(entry_dir, &self.register_paths_file);

        if self.module_kind.uses_require() {
            format!("require('{}');\n", relative)
        } else {
            format!("import '{}';\n", relative)
        }
    }
}

/// Discovers every entry file of the app and injects the registration
/// header into each. Zero discovered files completes as a no-op.
pub async fn inject_registration(
    output_path: &Path,
    app_root: &Path,
    model: ProgrammingModel,
    module_kind: ModuleKind,
) -> Result<()> {
    let entry_files = discover_entry_files(app_root, model).await?;
    tracing::debug!(
        "Injecting path registration into {} entry files under {}",
        entry_files.len(),
        app_root.display()
    );

    let injector = RegistrationInjector::new(output_path, app_root, module_kind);
    injector.inject(entry_files).await
}

/// Computes the path from the directory `from` to `to`, joined with forward
/// slashes. Module specifiers use `/` on every host, so the result never
/// contains a backslash.
///
/// Both sides are normalized first: manifest-derived entry paths carry `..`
/// segments (`scriptFile` is resolved against the manifest's directory),
/// and counting those as plain components would over-shoot the ascent.
fn relative_path(from: &Path, to: &Path) -> String {
    let from = normalize(from);
    let to = normalize(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    for component in &to[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    parts.join("/")
}

/// Collapses `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    components
}
