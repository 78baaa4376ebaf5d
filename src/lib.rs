pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::{clock::SystemClock, serial::SerialPorts};
pub use core::engine::{HookEngine, HookReport};
pub use utils::error::{HookError, Result};
