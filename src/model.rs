//! Programming-model and module-kind classification.
//!
//! The Azure Functions host exposes two programming models: the legacy v3
//! model, where each function carries its own `function.json` manifest, and
//! the v4 model, where a single glob in the app's `package.json` enumerates
//! all entry files. Which model an app uses is decided by the caller and
//! passed in; nothing in this crate detects it.

/// Stem of the generated path-registration shim. The compiled artifact is
/// `<output_path>/<app_root>/_registerPaths.js`.
pub const REGISTRATION_FILE_NAME: &str = "_registerPaths";

/// Azure Functions programming model of the app being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgrammingModel {
    /// Legacy model: one `function.json` manifest per function.
    V3,
    /// Current model: entry files enumerated by the `main` glob in
    /// `package.json`.
    V4,
}

impl ProgrammingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgrammingModel::V3 => "v3",
            ProgrammingModel::V4 => "v4",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "v3" | "3" => Some(ProgrammingModel::V3),
            "v4" | "4" => Some(ProgrammingModel::V4),
            _ => None,
        }
    }
}

/// Target module system of the compiled entry files.
///
/// Mirrors the compiler's module setting. Header generation only
/// distinguishes `CommonJs` from everything else: CommonJS apps get a
/// `require(...)` line, every other kind gets an `import ...` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    CommonJs,
    Amd,
    Umd,
    System,
    Es2015,
    Es2020,
    Es2022,
    EsNext,
    Node16,
    NodeNext,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::CommonJs => "commonjs",
            ModuleKind::Amd => "amd",
            ModuleKind::Umd => "umd",
            ModuleKind::System => "system",
            ModuleKind::Es2015 => "es2015",
            ModuleKind::Es2020 => "es2020",
            ModuleKind::Es2022 => "es2022",
            ModuleKind::EsNext => "esnext",
            ModuleKind::Node16 => "node16",
            ModuleKind::NodeNext => "nodenext",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "commonjs" | "cjs" => Some(ModuleKind::CommonJs),
            "amd" => Some(ModuleKind::Amd),
            "umd" => Some(ModuleKind::Umd),
            "system" => Some(ModuleKind::System),
            "es2015" | "es6" => Some(ModuleKind::Es2015),
            "es2020" => Some(ModuleKind::Es2020),
            "es2022" => Some(ModuleKind::Es2022),
            "esnext" => Some(ModuleKind::EsNext),
            "node16" => Some(ModuleKind::Node16),
            "nodenext" => Some(ModuleKind::NodeNext),
            _ => None,
        }
    }

    /// Whether entry files load the shim with `require` rather than `import`.
    pub fn uses_require(&self) -> bool {
        matches!(self, ModuleKind::CommonJs)
    }
}
