use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("media directory {} not found", .path.display())]
    MediaDir { path: PathBuf },

    #[error("failed to load {}: {reason}", .path.display())]
    Asset { path: PathBuf, reason: String },
}
