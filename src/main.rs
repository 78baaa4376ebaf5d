use clap::Parser;
use fw_hooks::domain::model::WaitOutcome;
use fw_hooks::utils::{logger, validation::Validate};
use fw_hooks::{CliConfig, HookEngine, SerialPorts, SystemClock, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fw-hooks");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let stage = config.stage;
    let targets = config.targets.clone();

    let result = if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let file_config = match TomlConfig::from_file(&path) {
            Ok(file_config) => file_config,
            Err(e) => {
                tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("❌ {}", e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        };
        HookEngine::new(file_config, SystemClock, SerialPorts).run(stage, &targets)
    } else {
        HookEngine::new(config, SystemClock, SerialPorts).run(stage, &targets)
    };

    // Hook outcomes are advisory, the surrounding pipeline keeps going either way.
    match result {
        Ok(report) => {
            match &report.wait {
                Some(WaitOutcome::Found { waited }) => {
                    tracing::info!("✅ Upload port back after {:?}", waited);
                }
                Some(WaitOutcome::TimedOut { waited }) => {
                    tracing::warn!("Upload port still missing after {:?}", waited);
                }
                Some(WaitOutcome::Skipped) | None => {}
            }
            if report.src_dir_overridden {
                tracing::info!("✅ Source dir override applied");
            }
        }
        Err(e) => {
            tracing::error!("❌ Hook stage failed: {}", e);
            eprintln!("❌ {}", e);
        }
    }

    Ok(())
}
