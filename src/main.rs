use clap::Parser;
use model_registry_cli::utils::{logger, validation::Validate};
use model_registry_cli::{dispatch, Cli, HttpRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting model-registry CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let registry = HttpRegistry::new(cli.base_url.clone());

    match dispatch(cli.command, &registry).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
