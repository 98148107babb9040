use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod help;

fn main() -> ExitCode {
    let args = cli::CareLaunch::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_target(false)
        .init();

    tracing::debug!("{:?}", args);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::CareLaunch) -> anyhow::Result<ExitCode> {
    match args.commands {
        Some(commands) => {
            commands::handle_commands(commands)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let config = carelaunch::config::load_config(args.config.as_ref())?;
            commands::launch::handle_launch(&config, args.launch_args)
        }
    }
}
