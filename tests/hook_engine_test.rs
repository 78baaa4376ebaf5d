use fw_hooks::core::{BuildEnv, Clock, HookStage, PortEnumerator, WaitOutcome};
use fw_hooks::utils::error::Result;
use fw_hooks::{CliConfig, HookEngine};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

// Test doubles: deterministic clock and scripted port enumeration, so the
// engine runs without hardware or wall-clock delay.

#[derive(Clone)]
struct FakeClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl FakeClock {
    fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }

    fn sleep(&self, dur: Duration) {
        self.offset.set(self.offset.get() + dur);
    }
}

#[derive(Clone)]
struct ScriptedPorts {
    elapsed: Rc<Cell<Duration>>,
    port: String,
    visible_at: Option<Duration>,
    calls: Rc<Cell<usize>>,
}

impl PortEnumerator for ScriptedPorts {
    fn list(&self) -> Result<Vec<String>> {
        self.calls.set(self.calls.get() + 1);
        match self.visible_at {
            Some(at) if self.elapsed.get() >= at => Ok(vec![self.port.clone()]),
            _ => Ok(vec![]),
        }
    }
}

fn cli_config(stage: HookStage, targets: &[&str], upload_port: Option<&str>) -> CliConfig {
    CliConfig {
        stage,
        project_dir: "/home/user/project".to_string(),
        targets: targets.iter().map(|t| t.to_string()).collect(),
        upload_port: upload_port.map(str::to_string),
        wait_timeout_secs: 15,
        poll_interval_ms: 500,
        config: None,
        verbose: false,
    }
}

fn engine_for(
    config: CliConfig,
    port: &str,
    visible_at: Option<Duration>,
) -> (HookEngine<CliConfig, FakeClock, ScriptedPorts>, Rc<Cell<usize>>) {
    let clock = FakeClock::new();
    let calls = Rc::new(Cell::new(0));
    let ports = ScriptedPorts {
        elapsed: clock.offset.clone(),
        port: port.to_string(),
        visible_at,
        calls: calls.clone(),
    };
    (HookEngine::new(config, clock, ports), calls)
}

#[test]
fn test_source_select_skipped_for_upload_target() {
    let config = cli_config(HookStage::SourceSelect, &["upload"], None);
    let (engine, _) = engine_for(config, "/dev/ttyUSB0", None);

    let report = engine.run(HookStage::SourceSelect, &["upload".to_string()]).unwrap();

    assert!(!report.src_dir_overridden);
    assert_eq!(report.env.src_dir, None);
    assert_eq!(report.wait, None);
}

#[test]
fn test_source_select_applied_for_test_target() {
    let config = cli_config(HookStage::SourceSelect, &["__test"], None);
    let (engine, _) = engine_for(config, "/dev/ttyUSB0", None);

    let report = engine.run(HookStage::SourceSelect, &["__test".to_string()]).unwrap();

    assert!(report.src_dir_overridden);
    assert_eq!(
        report.env.src_dir,
        Some(PathBuf::from("/home/user/project/src"))
    );
}

#[test]
fn test_post_upload_skipped_without_port() {
    let config = cli_config(HookStage::PostUpload, &["upload"], None);
    let (engine, calls) = engine_for(config, "/dev/ttyUSB0", Some(Duration::ZERO));

    let report = engine.run(HookStage::PostUpload, &["upload".to_string()]).unwrap();

    assert_eq!(report.wait, Some(WaitOutcome::Skipped));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_post_upload_finds_port_after_reset() {
    let config = cli_config(HookStage::PostUpload, &["upload"], Some("/dev/ttyUSB0"));
    let (engine, _) = engine_for(config, "/dev/ttyUSB0", Some(Duration::from_secs(1)));

    let report = engine.run(HookStage::PostUpload, &["upload".to_string()]).unwrap();

    assert_eq!(
        report.wait,
        Some(WaitOutcome::Found {
            waited: Duration::from_secs(1)
        })
    );
}

#[test]
fn test_post_upload_times_out_when_port_never_returns() {
    let config = cli_config(HookStage::PostUpload, &["upload"], Some("/dev/ttyUSB0"));
    let (engine, calls) = engine_for(config, "/dev/ttyUSB0", None);

    let report = engine.run(HookStage::PostUpload, &["upload".to_string()]).unwrap();

    assert_eq!(
        report.wait,
        Some(WaitOutcome::TimedOut {
            waited: Duration::from_secs(15)
        })
    );
    // Polled for the whole budget, once per interval
    assert_eq!(calls.get(), 30);
}

#[test]
fn test_report_env_reflects_invocation() {
    let config = cli_config(HookStage::SourceSelect, &["__test"], Some("/dev/ttyACM0"));
    let (engine, _) = engine_for(config, "/dev/ttyACM0", None);

    let report = engine
        .run(HookStage::SourceSelect, &["__test".to_string(), "size".to_string()])
        .unwrap();

    let expected = BuildEnv {
        project_dir: PathBuf::from("/home/user/project"),
        targets: vec!["__test".to_string(), "size".to_string()],
        src_dir: Some(PathBuf::from("/home/user/project/src")),
        upload_port: Some("/dev/ttyACM0".to_string()),
    };
    assert_eq!(report.env, expected);
}
