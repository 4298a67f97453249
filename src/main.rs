use clap::Parser;
use school_route_relay::core::ConfigProvider;
use school_route_relay::utils::{logger, validation::Validate};
use school_route_relay::{api, CliConfig, OrsClient, RouteRelay, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);
    tracing::info!("Starting school-route-relay");

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(config) => run(config).await,
                Err(e) => Err(e.into()),
            }
        }
        None => run(cli.clone()).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ {}", e);
        if let Some(relay_error) = e.downcast_ref::<school_route_relay::RelayError>() {
            tracing::error!("💡 Suggestion: {}", relay_error.recovery_suggestion());
        }
        std::process::exit(1);
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    config.validate()?;

    let client = OrsClient::from_config(&config)?;
    tracing::info!("Forwarding routes to {}", client.endpoint());

    let router = api::router::router(RouteRelay::new(client));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    api::serve(listener, router).await?;
    Ok(())
}
