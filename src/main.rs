use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process;

mod commands;
mod core;
mod utils;

use crate::core::hook::HookKind;
use crate::utils::config::{Config, DEFAULT_GIT_PROGRAM};

#[derive(Parser)]
#[command(name = "git-duet-install-hook")]
#[command(version)]
#[command(about = "Install a git-duet hook into the current repository", long_about = None)]
struct Cli {
    /// Hook to install: pre-commit or prepare-commit-msg
    #[arg(value_name = "pre-commit|prepare-commit-msg")]
    hook: String,

    /// Silence output
    #[arg(short, long)]
    quiet: bool,

    /// Version-control program used to locate the repository root
    #[arg(long, env = "GIT_DUET_INSTALL_HOOK_GIT", default_value = DEFAULT_GIT_PROGRAM, hide = true)]
    git_program: String,
}

/// Maps a parse failure to the installer's exit codes: help and version
/// exit 0, every other argument error exits 1.
fn exit_with(err: clap::Error) -> ! {
    let _ = err.print();
    process::exit(if err.use_stderr() { 1 } else { 0 });
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|err| exit_with(err));

    let _ = utils::logger::init_logger();
    log::debug!("started: {:?}", std::env::args().collect::<Vec<_>>());

    let hook = match cli.hook.parse::<HookKind>() {
        Ok(hook) => hook,
        Err(err) => exit_with(Cli::command().error(ErrorKind::InvalidValue, err)),
    };

    let mut config = Config::new(hook);
    config.set_quiet(cli.quiet);
    config.set_git_program(cli.git_program);

    if let Err(err) = commands::install::install_hook(&config) {
        log::debug!("install failed: {:?}", err);
        println!("{}", err);
        process::exit(1);
    }
}
