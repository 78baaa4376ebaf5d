// Adapters layer: concrete implementations for external systems (clock, serial enumeration).

pub mod clock {
    use crate::domain::ports::Clock;
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> Instant {
            Instant::now()
        }

        fn sleep(&self, dur: Duration) {
            std::thread::sleep(dur);
        }
    }
}

pub mod serial {
    use crate::domain::ports::PortEnumerator;
    use crate::utils::error::Result;

    #[derive(Debug, Clone, Copy, Default)]
    pub struct SerialPorts;

    impl PortEnumerator for SerialPorts {
        fn list(&self) -> Result<Vec<String>> {
            let ports = serialport::available_ports()?;
            Ok(ports.into_iter().map(|p| p.port_name).collect())
        }
    }
}
