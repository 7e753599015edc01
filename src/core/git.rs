use std::path::PathBuf;
use std::process::Command;

use super::error::InstallError;

/// Asks `program` for the toplevel of the working tree containing the
/// current directory.
pub fn repo_root(program: &str) -> Result<PathBuf, InstallError> {
    let output = Command::new(program)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|source| InstallError::GitUnavailable {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("{} rev-parse --show-toplevel: {}", program, output.status)
        } else {
            stderr
        };
        return Err(InstallError::NotARepository(message));
    }

    let root = path_from_stdout(&output.stdout);
    log::debug!("repository root: {}", root.display());
    Ok(root)
}

/// Paths are raw bytes on unix and need not be valid UTF-8.
#[cfg(unix)]
fn path_from_stdout(stdout: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(stdout.trim_ascii()))
}

#[cfg(not(unix))]
fn path_from_stdout(stdout: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(stdout).trim())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn fake_git(dir: &TempDir, body: &str) -> String {
        let path = dir.path().join("fake-git");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn trims_toplevel_output() {
        let tmp = TempDir::new().unwrap();
        let git = fake_git(&tmp, "echo '  /work/project  '");
        assert_eq!(repo_root(&git).unwrap(), PathBuf::from("/work/project"));
    }

    #[test]
    fn keeps_non_utf8_bytes_in_root() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let git = fake_git(&tmp, r"printf '/work/proj-\377\n'");
        assert_eq!(
            repo_root(&git).unwrap(),
            PathBuf::from(OsStr::from_bytes(b"/work/proj-\xff"))
        );
    }

    #[test]
    fn failing_command_surfaces_stderr() {
        let tmp = TempDir::new().unwrap();
        let git = fake_git(
            &tmp,
            "echo 'fatal: not a git repository (or any of the parent directories): .git' >&2\nexit 128",
        );
        let err = repo_root(&git).unwrap_err();
        assert!(matches!(err, InstallError::NotARepository(_)));
        assert_eq!(
            err.to_string(),
            "fatal: not a git repository (or any of the parent directories): .git"
        );
    }

    #[test]
    fn silent_failure_reports_exit_status() {
        let tmp = TempDir::new().unwrap();
        let git = fake_git(&tmp, "exit 3");
        let err = repo_root(&git).unwrap_err();
        assert!(err.to_string().contains("rev-parse --show-toplevel"));
    }

    #[test]
    fn missing_program_is_reported() {
        let err = repo_root("definitely-not-a-real-vcs-binary").unwrap_err();
        assert!(matches!(err, InstallError::GitUnavailable { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-vcs-binary"));
    }
}
