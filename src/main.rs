use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use refund_estimator::api::{AppState, create_router};
use refund_estimator::config::ParameterTable;

#[derive(Parser, Debug)]
#[command(
    name = "refund-estimator",
    about = "HTTP service estimating annual income-tax refunds from Form 106 figures"
)]
struct Cli {
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    bind: IpAddr,
    #[arg(
        long,
        env = "TAX_PARAMS",
        help = "YAML file of per-year tax parameters; the built-in table is used when omitted"
    )]
    params: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let table = match &cli.params {
        Some(path) => ParameterTable::load(path)?,
        None => ParameterTable::builtin(),
    };
    info!(
        years = ?table.years(),
        source = %cli.params.as_ref().map_or("builtin".to_string(), |p| p.display().to_string()),
        "Tax parameters loaded"
    );

    let app = create_router(AppState::new(table));
    let addr = SocketAddr::new(cli.bind, cli.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Refund estimator listening");

    axum::serve(listener, app).await?;
    Ok(())
}
