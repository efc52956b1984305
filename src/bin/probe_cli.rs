use clap::Parser;
use halving_probe::utils::logger;
use halving_probe::{CliConfig, ProbeEngine, ProbeError, TomlConfig};

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = run(&args) {
        tracing::error!(
            "Probe failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CliConfig) -> Result<(), ProbeError> {
    let file = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let settings = args.resolve(file.as_ref())?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let engine = ProbeEngine::new(settings);
    let stdout = std::io::stdout();
    engine.run(&mut stdout.lock())?;
    Ok(())
}
