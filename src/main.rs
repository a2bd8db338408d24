use clap::Parser;
use domain_gate::core::ConfigProvider;
use domain_gate::utils::{logger, validation::Validate};
use domain_gate::{
    build_identity_source, create_router, start_server, CliArgs, GateConfig, IdentityGate,
    LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting domain-gate");
    let (config_path, required) = args.config_source();
    tracing::info!("Loading configuration from: {}", config_path);

    let mut config = match GateConfig::load(config_path, required) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config file '{}': {}", config_path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    args.apply_to(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let addr = config.bind_addr()?;
    let storage = LocalStorage::new(config.content_root());
    let content_root = std::env::current_dir()?.join(storage.base_path());
    tracing::info!(
        expected_domain = config.expected_domain(),
        strategy = %config.identity.strategy,
        content_root = %content_root.display(),
        "Configuration loaded and validated"
    );

    for file in [config.allowed_file(), config.forbidden_file()] {
        if !content_root.join(file).is_file() {
            tracing::warn!("Gate artifact {} is missing under {}", file, content_root.display());
        }
    }

    if args.check {
        println!("✅ Configuration is valid");
        return Ok(());
    }

    let source = build_identity_source(&config.identity)?;
    let gate = IdentityGate::new(source, storage, &config);
    let app = create_router(gate, config.request_timeout());

    start_server(app, addr).await?;

    Ok(())
}
