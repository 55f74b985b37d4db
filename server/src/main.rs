use tokio::net::TcpListener;
use todo_core::TodoStore;
use todo_server::settings::Settings;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = Settings::new()?;
    let addr = settings.addr();
    let listener = TcpListener::bind(&addr).await?;

    // Todos live only in memory; every start begins from the seed.
    let store = todo_server::shared(TodoStore::with_seed());
    info!("Todo API service running on http://{addr}");

    todo_server::run(listener, store, shutdown_signal()).await?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
