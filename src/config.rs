use serde::Deserialize;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SchedulerConfig {
    /// Submit binary to invoke (default: `srun` from PATH). The partition,
    /// resource request and training flags are fixed and intentionally not
    /// configurable here.
    #[serde(default = "default_binary")]
    pub binary: String,
}

fn default_binary() -> String {
    "srun".to_string()
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("carelaunch"))
}

pub fn load_config(config_path: Option<&PathBuf>) -> Result<Config, config::ConfigError> {
    let mut config_vec = vec![];

    // User-provided config file
    if let Some(config_path) = config_path {
        if config_path.exists() {
            config_vec.push(config_path.clone());
        } else {
            eprintln!("Warning: Config file {config_path:?} not found.");
        }
    }

    // Default config file
    if let Some(default_config_path) = get_config_dir().map(|d| d.join("carelaunch.toml")) {
        if default_config_path.exists() {
            config_vec.push(default_config_path);
        }
    }

    let settings = config::Config::builder();
    let settings = config_vec.iter().fold(settings, |s, path| {
        s.add_source(config::File::from(path.as_path()))
    });

    settings
        .add_source(
            config::Environment::with_prefix("CARELAUNCH")
                .separator("_")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_srun() {
        let config = Config::default();
        assert_eq!(config.scheduler.binary, "srun");
    }
}
