use crate::domain::model::WaitOutcome;
use crate::domain::ports::{Clock, PortEnumerator};
use std::time::Duration;

pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

// After flashing, boards that reset drop off the bus for a moment. Waiting for
// the configured port to come back avoids racing a serial monitor against the
// device re-enumeration.
pub struct PortWait<'a, K: Clock, E: PortEnumerator> {
    clock: &'a K,
    ports: &'a E,
    timeout: Duration,
    interval: Duration,
}

impl<'a, K: Clock, E: PortEnumerator> PortWait<'a, K, E> {
    pub fn new(clock: &'a K, ports: &'a E, timeout: Duration, interval: Duration) -> Self {
        Self {
            clock,
            ports,
            timeout,
            interval,
        }
    }

    pub fn wait(&self, port: Option<&str>) -> WaitOutcome {
        let port = match port {
            Some(p) if !p.trim().is_empty() => p,
            // 沒有固定 port,交給上游自動偵測
            _ => return WaitOutcome::Skipped,
        };

        println!("Waiting up to {}s for {}...", self.timeout.as_secs(), port);

        let start = self.clock.now();
        while self.clock.now() - start < self.timeout {
            match self.ports.list() {
                Ok(names) => {
                    if names.iter().any(|n| n == port) {
                        let waited = self.clock.now() - start;
                        println!("Found {}", port);
                        tracing::debug!("{} re-enumerated after {:?}", port, waited);
                        return WaitOutcome::Found { waited };
                    }
                }
                Err(e) => {
                    // Enumeration hiccups count as "port not visible yet"
                    tracing::debug!("Port enumeration failed, retrying: {}", e);
                }
            }
            self.clock.sleep(self.interval);
        }

        let waited = self.clock.now() - start;
        tracing::warn!("{} not found after {}s", port, self.timeout.as_secs());
        println!(
            "Warning: {} not found after {}s, continuing anyway",
            port,
            self.timeout.as_secs()
        );
        WaitOutcome::TimedOut { waited }
    }
}
