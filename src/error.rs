use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("profile not found: {0}")]
    ProfileNotFound(String),
    #[error("base folder not found: {0}")]
    BaseFolderNotFound(String),
    #[error("folder not found: {0}")]
    SegmentNotFound(String),
    #[error("cannot simplify non-link entry: {0}")]
    ProjectionType(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("no urls found in file: {}", .0.display())]
    NoUrlsFound(PathBuf),
    #[error("file does not exist: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),
    #[error("couldn't read file {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("couldn't parse file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("launch failed: {0}")]
    Launch(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
