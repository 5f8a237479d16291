use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionsError {
    #[error("missing input file: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("missing config file: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config file {}: {message}", path.display())]
    ConfigFormat { path: PathBuf, message: String },

    #[error("config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ActionsError>;
