use crate::config::Config;
use crate::launch::LaunchRequest;
use anyhow::{Context, Result};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Hands a composed launch request to the cluster scheduler and blocks
/// until the attached session ends. No retries, no failure classification;
/// whatever the child reports is what the caller gets.
pub struct SrunExecutor {
    binary: String,
}

impl SrunExecutor {
    pub fn from_config(config: &Config) -> Self {
        Self {
            binary: config.scheduler.binary.clone(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Spawns the scheduler attached to the current terminal and waits.
    pub fn submit(&self, request: &LaunchRequest) -> Result<ExitStatus> {
        debug!("submitting: {}", request.render(&self.binary));
        Command::new(&self.binary)
            .args(request.to_args())
            .status()
            .with_context(|| format!("Failed to launch scheduler binary '{}'", self.binary))
    }
}

/// Maps a child exit status to the code this process should exit with.
/// Signal deaths use the conventional 128+signal encoding.
pub fn status_to_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return code.clamp(0, 255) as u8;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (128 + signal).clamp(0, 255) as u8;
        }
    }
    1
}
