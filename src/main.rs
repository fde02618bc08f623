use clap::Parser;
use swapi_characters::core::runner::program_name;
use swapi_characters::utils::logger;
use swapi_characters::{run, CliConfig, ReqwestTransport, SwapiError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let program = program_name();
    let transport = ReqwestTransport::new();
    let mut stdout = std::io::stdout().lock();

    match run(&config, &program, transport, &mut stdout).await {
        Ok(_) => {}
        Err(e @ SwapiError::UsageError { .. }) => {
            println!("{}", e);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            tracing::error!("❌ Listing failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
