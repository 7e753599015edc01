use crate::core::hook::HookKind;

pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Settings for a single run, resolved from the command line and
/// environment. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub hook: HookKind,
    pub quiet: bool,
    pub git_program: String,
}

impl Config {
    pub fn new(hook: HookKind) -> Self {
        Self {
            hook,
            quiet: false,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
        }
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn set_git_program(&mut self, program: String) {
        if !program.trim().is_empty() {
            self.git_program = program;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_git_and_verbose() {
        let config = Config::new(HookKind::PreCommit);
        assert_eq!(config.git_program, "git");
        assert!(!config.quiet);
    }

    #[test]
    fn blank_git_program_keeps_default() {
        let mut config = Config::new(HookKind::PrepareCommitMsg);
        config.set_git_program("   ".to_string());
        assert_eq!(config.git_program, DEFAULT_GIT_PROGRAM);

        config.set_git_program("/opt/bin/git".to_string());
        assert_eq!(config.git_program, "/opt/bin/git");
    }
}
