use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use taskman_api::{build_router, AppState};
use taskman_core::{InMemoryTaskRepository, TaskService};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskman-api")]
#[command(about = "In-memory task manager HTTP API", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "TASKMAN_PORT", default_value_t = 5000)]
    port: u16,

    /// Environment-mode label; `development` enables verbose error detail
    #[arg(long, env = "TASKMAN_ENV", default_value = "development")]
    environment: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let mut service = TaskService::new(InMemoryTaskRepository::new());
    service.seed_welcome_tasks()?;
    let state = AppState::new(service, cli.environment.clone());

    let addr: SocketAddr = ([0, 0, 0, 0], cli.port).into();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on port {} in {} mode", cli.port, cli.environment);
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
