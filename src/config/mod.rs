pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::HookStage;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fw-hooks")]
#[command(about = "Build hooks for firmware test builds and upload port recovery")]
pub struct CliConfig {
    /// Which extension point the orchestrator is invoking
    #[arg(value_enum)]
    pub stage: HookStage,

    #[arg(long, default_value = ".")]
    pub project_dir: String,

    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<String>,

    #[arg(long)]
    pub upload_port: Option<String>,

    #[arg(long, default_value = "15")]
    pub wait_timeout_secs: u64,

    #[arg(long, default_value = "500")]
    pub poll_interval_ms: u64,

    #[arg(long, help = "Read project and upload settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn project_dir(&self) -> &str {
        &self.project_dir
    }

    fn upload_port(&self) -> Option<&str> {
        self.upload_port.as_deref()
    }

    fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("project_dir", &self.project_dir)?;
        validation::validate_positive_number("poll_interval_ms", self.poll_interval_ms, 1)?;
        validation::validate_range("wait_timeout_secs", self.wait_timeout_secs, 1, 600)?;
        // 空的 upload_port 不算錯誤,post-upload hook 會直接跳過
        Ok(())
    }
}
