use clap::Parser;
use dwaas_broker::cli::Cli;
use dwaas_broker::config::Config;
use dwaas_broker::db::PgCatalog;
use dwaas_broker::service::CredentialProvisioner;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.redacted_database_url(),
        loglevel = %cfg.loglevel,
        validate_adopted = cfg.validate_adopted
    );

    let catalog = PgCatalog::connect(&cfg).await?;
    let provisioner = CredentialProvisioner::new(catalog).validate_adopted(cfg.validate_adopted);

    let output = cli.run(&cfg, &provisioner).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
