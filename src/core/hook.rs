use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::{InstallError, UnknownHook};

const PRE_COMMIT_HOOK: &str = r#"#!/usr/bin/env bash
exec git duet-pre-commit "$@"
"#;

const PREPARE_COMMIT_MSG_HOOK: &str = r#"#!/usr/bin/env bash
exec git duet-prepare-commit-msg "$1"
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    PreCommit,
    PrepareCommitMsg,
}

impl HookKind {
    pub const ALL: [HookKind; 2] = [HookKind::PreCommit, HookKind::PrepareCommitMsg];

    pub fn file_name(self) -> &'static str {
        match self {
            HookKind::PreCommit => "pre-commit",
            HookKind::PrepareCommitMsg => "prepare-commit-msg",
        }
    }

    /// Script written to the hook file, trailing newline included.
    pub fn template(self) -> &'static str {
        match self {
            HookKind::PreCommit => PRE_COMMIT_HOOK,
            HookKind::PrepareCommitMsg => PREPARE_COMMIT_MSG_HOOK,
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for HookKind {
    type Err = UnknownHook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookKind::ALL
            .into_iter()
            .find(|kind| kind.file_name() == s)
            .ok_or_else(|| UnknownHook(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    /// The hook already held the expected script; nothing was written.
    AlreadyInstalled(PathBuf),
}

pub fn hook_path(root: &Path, kind: HookKind) -> PathBuf {
    root.join(".git").join("hooks").join(kind.file_name())
}

/// Writes the hook script for `kind` under `root`.
///
/// An empty (or whitespace-only) hook file is overwritten, a file already
/// holding the script is left alone, and anything else is a conflict that
/// leaves the file untouched.
pub fn install(root: &Path, kind: HookKind) -> Result<InstallOutcome, InstallError> {
    let path = hook_path(root, kind);
    log::debug!("hook path: {}", path.display());

    let mut file = open_hook_file(&path).map_err(InstallError::io(&path))?;
    let mut existing = Vec::new();
    file.read_to_end(&mut existing).map_err(InstallError::io(&path))?;

    let existing = String::from_utf8_lossy(&existing);
    let existing = existing.trim();
    if !existing.is_empty() {
        if existing != kind.template().trim() {
            log::info!("refusing to overwrite {}", path.display());
            return Err(InstallError::Conflict { path });
        }
        log::info!("{} hook already installed at {}", kind, path.display());
        return Ok(InstallOutcome::AlreadyInstalled(path));
    }

    write_template(&mut file, kind).map_err(InstallError::io(&path))?;

    log::info!("wrote {} hook to {}", kind, path.display());
    Ok(InstallOutcome::Installed(path))
}

fn write_template(file: &mut File, kind: HookKind) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(kind.template().as_bytes())?;
    file.flush()
}

fn open_hook_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o777);
    }

    options.open(path)
}
