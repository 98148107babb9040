use crate::cli;
use anyhow::Result;
use carelaunch::config::Config;
use carelaunch::executor::{status_to_code, SrunExecutor};
use carelaunch::launch::{LaunchRequest, JOB_NAME_ENV};
use std::env;
use std::process::ExitCode;
use tracing::warn;

pub(crate) fn handle_launch(config: &Config, args: cli::LaunchArgs) -> Result<ExitCode> {
    // Read once at invocation start, not treated as ambient state. An unset
    // name is forwarded as empty; srun decides what to do with it.
    let job_name = env::var(JOB_NAME_ENV).unwrap_or_default();
    if job_name.is_empty() {
        warn!("{JOB_NAME_ENV} is not set; submitting with an empty job name");
    }

    let request = LaunchRequest::new(job_name, args.train_args);
    let executor = SrunExecutor::from_config(config);

    if args.dry_run {
        println!("{}", request.render(executor.binary()));
        return Ok(ExitCode::SUCCESS);
    }

    let status = executor.submit(&request)?;
    Ok(ExitCode::from(status_to_code(status)))
}
