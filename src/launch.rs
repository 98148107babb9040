use std::borrow::Cow;
use std::ffi::OsString;

/// Environment variable naming the cluster job. Read once per invocation;
/// an unset variable yields an empty name, which srun is left to handle.
pub const JOB_NAME_ENV: &str = "JOB_NAME";

/// Compute partition the run is submitted to.
pub const PARTITION: &str = "gpu-2080ti";

/// CPU cores requested per task.
pub const CPUS_PER_TASK: u32 = 4;

/// Memory requested for the job.
pub const MEMORY: &str = "16G";

/// GPU devices requested (`--gres=gpu:N`).
pub const GPUS: u32 = 2;

/// Wrapper script that runs its arguments inside the singularity image.
pub const CONTAINER_WRAPPER: &str = "./run_singularity.sh";

/// Training entrypoint executed inside the container.
pub const TRAIN_ENTRYPOINT: &str = "main.py";

/// Base flags passed to the training entrypoint on every run. Caller
/// arguments are appended after these; duplicate-flag resolution is the
/// training program's business.
pub const BASE_FLAGS: [&str; 7] = [
    "--project",
    "mlp-test",
    "--use-batch-norm",
    "--use-dep-mat",
    "--use-wandb",
    "--n-steps",
    "400001",
];

/// One srun submission: the job name from the environment plus whatever
/// flags the caller wants forwarded to the training entrypoint.
///
/// Built once per invocation and handed straight to the executor.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub job_name: String,
    pub train_args: Vec<OsString>,
}

impl LaunchRequest {
    pub fn new(job_name: String, train_args: Vec<OsString>) -> Self {
        Self {
            job_name,
            train_args,
        }
    }

    /// The full srun argument vector, without the scheduler binary itself.
    ///
    /// Order is fixed: scheduler flags, wrapper, entrypoint, base flags,
    /// then the caller's arguments exactly as supplied.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(8 + BASE_FLAGS.len() + self.train_args.len());
        args.push(format!("--job-name={}", self.job_name).into());
        args.push(format!("--partition={PARTITION}").into());
        args.push(format!("--cpus-per-task={CPUS_PER_TASK}").into());
        args.push(format!("--mem={MEMORY}").into());
        args.push("--pty".into());
        args.push(format!("--gres=gpu:{GPUS}").into());
        args.push(CONTAINER_WRAPPER.into());
        args.push(TRAIN_ENTRYPOINT.into());
        args.extend(BASE_FLAGS.iter().map(OsString::from));
        args.extend(self.train_args.iter().cloned());
        args
    }

    /// Shell-quoted rendering of the command, for logs and `--dry-run`.
    pub fn render(&self, binary: &str) -> String {
        std::iter::once(OsString::from(binary))
            .chain(self.to_args())
            .map(|arg| {
                let arg = arg.to_string_lossy().into_owned();
                shell_escape::escape(Cow::from(arg)).into_owned()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn base_command_without_trailing_args() {
        let request = LaunchRequest::new("mlp-sweep".to_string(), vec![]);
        assert_eq!(
            request.to_args(),
            os(&[
                "--job-name=mlp-sweep",
                "--partition=gpu-2080ti",
                "--cpus-per-task=4",
                "--mem=16G",
                "--pty",
                "--gres=gpu:2",
                "./run_singularity.sh",
                "main.py",
                "--project",
                "mlp-test",
                "--use-batch-norm",
                "--use-dep-mat",
                "--use-wandb",
                "--n-steps",
                "400001",
            ])
        );
    }

    #[test]
    fn trailing_args_are_appended_not_substituted() {
        let request =
            LaunchRequest::new("mlp-sweep".to_string(), os(&["--n-steps", "10"]));
        let args = request.to_args();
        let tail: Vec<_> = args[args.len() - 4..].to_vec();
        assert_eq!(tail, os(&["--n-steps", "400001", "--n-steps", "10"]));
    }

    #[test]
    fn trailing_args_keep_their_order() {
        let extra = os(&["--seed", "42", "--verbose", "--latent-dim", "5"]);
        let request = LaunchRequest::new(String::new(), extra.clone());
        let args = request.to_args();
        assert_eq!(&args[args.len() - extra.len()..], extra.as_slice());
    }

    #[test]
    fn empty_job_name_still_composes() {
        let request = LaunchRequest::new(String::new(), vec![]);
        let args = request.to_args();
        assert_eq!(args[0], OsString::from("--job-name="));
        assert_eq!(args[1], OsString::from("--partition=gpu-2080ti"));
    }

    #[test]
    fn render_quotes_arguments_with_spaces() {
        let request = LaunchRequest::new(
            "mlp-sweep".to_string(),
            os(&["--notes", "two gaussians"]),
        );
        let rendered = request.render("srun");
        assert!(rendered.starts_with("srun --job-name=mlp-sweep "));
        assert!(rendered.ends_with("--notes 'two gaussians'"));
    }

    #[test]
    fn render_with_empty_job_name() {
        let request = LaunchRequest::new(String::new(), vec![]);
        assert!(request.render("srun").starts_with("srun --job-name= "));
    }
}
