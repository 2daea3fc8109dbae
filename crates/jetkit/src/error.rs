use thiserror::Error;

#[derive(Error, Debug)]
pub enum JetkitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Binning error: {0}")]
    Binning(String),

    #[error("Attribute error: {0}")]
    Attr(String),
}

pub type Result<T> = std::result::Result<T, JetkitError>;
