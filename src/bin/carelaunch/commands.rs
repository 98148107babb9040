use crate::cli::Commands;

pub mod completions;
pub mod launch;

pub fn handle_commands(commands: Commands) -> anyhow::Result<()> {
    match commands {
        Commands::Completions(completions_args) => {
            completions::handle_completions(completions_args)
        }
    }
}
