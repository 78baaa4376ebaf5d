use crate::utils::error::Result;
use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, dur: Duration);
}

pub trait PortEnumerator {
    /// Names of the serial devices currently attached to the host.
    fn list(&self) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn project_dir(&self) -> &str;
    fn upload_port(&self) -> Option<&str>;
    fn wait_timeout(&self) -> Duration;
    fn poll_interval(&self) -> Duration;
}
