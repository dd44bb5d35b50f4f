use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuncPackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob expansion error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, FuncPackError>;
