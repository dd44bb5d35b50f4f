pub mod discovery;
pub mod error;
pub mod inject;
pub mod model;

pub use discovery::{discover_entry_files, EntryDiscoverer, GlobDiscovery, ManifestDiscovery};
pub use error::{FuncPackError, Result};
pub use inject::{inject_registration, RegistrationInjector};
pub use model::{ModuleKind, ProgrammingModel, REGISTRATION_FILE_NAME};
