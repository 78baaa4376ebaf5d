use crate::core::port_wait::PortWait;
use crate::core::src_dir;
use crate::domain::model::{BuildEnv, HookStage, WaitOutcome};
use crate::domain::ports::{Clock, ConfigProvider, PortEnumerator};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct HookEngine<C: ConfigProvider, K: Clock, E: PortEnumerator> {
    config: C,
    clock: K,
    ports: E,
}

#[derive(Debug, Clone)]
pub struct HookReport {
    pub env: BuildEnv,
    pub src_dir_overridden: bool,
    pub wait: Option<WaitOutcome>,
}

impl<C: ConfigProvider, K: Clock, E: PortEnumerator> HookEngine<C, K, E> {
    pub fn new(config: C, clock: K, ports: E) -> Self {
        Self {
            config,
            clock,
            ports,
        }
    }

    pub fn run(&self, stage: HookStage, targets: &[String]) -> Result<HookReport> {
        let mut env = BuildEnv {
            project_dir: PathBuf::from(self.config.project_dir()),
            targets: targets.to_vec(),
            src_dir: None,
            upload_port: self.config.upload_port().map(str::to_string),
        };

        let mut src_dir_overridden = false;
        let mut wait = None;

        match stage {
            HookStage::SourceSelect => {
                tracing::debug!("Requested targets: {:?}", env.targets);
                if let Some(dir) = src_dir::apply_test_src_dir(&mut env) {
                    tracing::info!("Test build requested, source dir set to {}", dir.display());
                    // Consumed by the orchestrator's wrapper to reconfigure
                    // its source collection.
                    println!("PROJECT_SRC_DIR={}", dir.display());
                    src_dir_overridden = true;
                }
            }
            HookStage::PostUpload => {
                let outcome = PortWait::new(
                    &self.clock,
                    &self.ports,
                    self.config.wait_timeout(),
                    self.config.poll_interval(),
                )
                .wait(env.upload_port.as_deref());
                wait = Some(outcome);
            }
        }

        Ok(HookReport {
            env,
            src_dir_overridden,
            wait,
        })
    }
}
