pub mod engine;
pub mod port_wait;
pub mod src_dir;

pub use crate::domain::model::{BuildEnv, HookStage, WaitOutcome};
pub use crate::domain::ports::{Clock, ConfigProvider, PortEnumerator};
pub use crate::utils::error::Result;
