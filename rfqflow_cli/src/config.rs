use anyhow::{Context, Result};
use rfqflow_core::{NextPolicy, Plan};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "RFQFLOW_CONFIG";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plan: Plan,
    pub policy: NextPolicy,
}

impl Config {
    /// Get (~/.rfqflow)
    pub fn rfqflow_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".rfqflow"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Self::config_file_from(std::env::var_os(CONFIG_ENV))
    }

    /// `RFQFLOW_CONFIG` when set and non-empty, else ~/.rfqflow/config.json
    pub fn config_file_from(env_path: Option<OsString>) -> Result<PathBuf> {
        match env_path {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(Self::rfqflow_dir()?.join("config.json")),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(config_path).context("Failed to read config file")?;
            let config: Config =
                serde_json::from_str(&content).context("Failed to parse config file")?;
            Ok(config)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Effective config for a command. The file is only read when a flag
    /// leaves something open, so a broken file never blocks a fully
    /// specified invocation.
    pub fn resolve(plan: Option<Plan>, policy: Option<NextPolicy>) -> Result<Self> {
        Self::resolve_from(Self::config_file()?, plan, policy)
    }

    pub fn resolve_from<P: AsRef<Path>>(
        config_path: P,
        plan: Option<Plan>,
        policy: Option<NextPolicy>,
    ) -> Result<Self> {
        if let (Some(plan), Some(policy)) = (plan, policy) {
            debug!("plan and policy given on the command line, skipping config file");
            return Ok(Config { plan, policy });
        }

        Ok(Self::load_from_path(config_path)?.with_overrides(plan, policy))
    }

    /// Command-line choices win over the file.
    pub fn with_overrides(self, plan: Option<Plan>, policy: Option<NextPolicy>) -> Self {
        Self {
            plan: plan.unwrap_or(self.plan),
            policy: policy.unwrap_or(self.policy),
        }
    }
}
