use std::path::PathBuf;
use std::time::Duration;

/// Target name the build frontend passes when tests are requested.
pub const TEST_TARGET: &str = "__test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv {
    pub project_dir: PathBuf,
    pub targets: Vec<String>,
    pub src_dir: Option<PathBuf>,
    pub upload_port: Option<String>,
}

impl BuildEnv {
    pub fn wants_tests(&self) -> bool {
        self.targets.iter().any(|t| t == TEST_TARGET)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum HookStage {
    /// Before source collection, may redirect the src dir for test builds
    SourceSelect,
    /// After firmware upload, waits for the device to re-enumerate
    PostUpload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// No fixed port configured, nothing to wait for
    Skipped,
    Found { waited: Duration },
    TimedOut { waited: Duration },
}
