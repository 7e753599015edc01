use anyhow::Result;

use crate::core::git;
use crate::core::hook::{self, InstallOutcome};
use crate::utils::config::Config;

pub const PROGRAM_NAME: &str = "git-duet-install-hook";

pub fn install_hook(config: &Config) -> Result<()> {
    let root = git::repo_root(&config.git_program)?;

    match hook::install(&root, config.hook)? {
        InstallOutcome::Installed(path) => {
            if !config.quiet {
                println!("{}: Installed hook to {}", PROGRAM_NAME, path.display());
            }
        }
        InstallOutcome::AlreadyInstalled(_) => {}
    }

    Ok(())
}
