use crate::help::COMPLETIONS_HELP;
use clap::{Parser, ValueEnum};
use clap_complete::Shell as CompleteShell;
use std::ffi::OsString;

#[derive(Debug, Parser)]
#[command(
    name = "carelaunch",
    author,
    version,
    about = "Launches containerized care-nl-ica training runs on Slurm. Wraps srun."
)]
pub struct CareLaunch {
    /// Sub Commands
    #[command(subcommand)]
    pub commands: Option<Commands>,

    #[command(flatten)]
    pub launch_args: LaunchArgs,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    #[arg(long, global = true, help = "Path to the config file")]
    pub config: Option<std::path::PathBuf>,
}

#[derive(Debug, Parser)]
pub enum Commands {
    /// Generate tab-completion scripts for your shell
    #[command(
        after_help = COMPLETIONS_HELP,
        arg_required_else_help = true
    )]
    Completions(CompletionsArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct LaunchArgs {
    /// Print the composed srun command instead of submitting it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra flags forwarded verbatim to the training entrypoint
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub train_args: Vec<OsString>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// The shell to generate the completions for
    pub shell: Shell,
}

impl From<Shell> for CompleteShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompleteShell::Bash,
            Shell::Elvish => CompleteShell::Elvish,
            Shell::Fish => CompleteShell::Fish,
            Shell::Powershell => CompleteShell::PowerShell,
            Shell::Zsh => CompleteShell::Zsh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_flags_are_captured_verbatim() {
        let args =
            CareLaunch::try_parse_from(["carelaunch", "--n-steps", "10", "--verbose"]).unwrap();
        assert!(args.commands.is_none());
        assert_eq!(
            args.launch_args.train_args,
            vec![
                OsString::from("--n-steps"),
                OsString::from("10"),
                OsString::from("--verbose")
            ]
        );
    }

    #[test]
    fn dry_run_is_parsed_before_trailing_args() {
        let args = CareLaunch::try_parse_from(["carelaunch", "--dry-run", "--seed", "42"]).unwrap();
        assert!(args.launch_args.dry_run);
        assert_eq!(
            args.launch_args.train_args,
            vec![OsString::from("--seed"), OsString::from("42")]
        );
    }

    #[test]
    fn no_arguments_means_plain_launch() {
        let args = CareLaunch::try_parse_from(["carelaunch"]).unwrap();
        assert!(args.commands.is_none());
        assert!(!args.launch_args.dry_run);
        assert!(args.launch_args.train_args.is_empty());
    }
}
