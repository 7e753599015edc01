use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("failed to run `{program}`: {source}")]
    GitUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    NotARepository(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't install hook: file {} already exists", .path.display())]
    Conflict { path: PathBuf },
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid hook '{0}' (expected one of: pre-commit, prepare-commit-msg)")]
pub struct UnknownHook(pub String);

impl InstallError {
    pub fn io(path: &Path) -> impl FnOnce(std::io::Error) -> InstallError + '_ {
        move |source| InstallError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
