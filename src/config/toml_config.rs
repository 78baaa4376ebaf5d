use crate::core::port_wait::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{HookError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    pub upload: Option<UploadConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub port: Option<String>,
    pub wait_timeout_seconds: Option<u64>,
    pub poll_interval_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HookError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;
        validation::validate_path("project.dir", &self.project.dir)?;

        if let Some(upload) = &self.upload {
            if let Some(timeout) = upload.wait_timeout_seconds {
                validation::validate_range("upload.wait_timeout_seconds", timeout, 1, 600)?;
            }
            if let Some(interval) = upload.poll_interval_ms {
                validation::validate_positive_number("upload.poll_interval_ms", interval, 1)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn project_dir(&self) -> &str {
        &self.project.dir
    }

    fn upload_port(&self) -> Option<&str> {
        self.upload.as_ref().and_then(|u| u.port.as_deref())
    }

    fn wait_timeout(&self) -> Duration {
        self.upload
            .as_ref()
            .and_then(|u| u.wait_timeout_seconds)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_WAIT_TIMEOUT)
    }

    fn poll_interval(&self) -> Duration {
        self.upload
            .as_ref()
            .and_then(|u| u.poll_interval_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL)
    }
}
