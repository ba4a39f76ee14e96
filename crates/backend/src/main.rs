pub mod routes;
pub mod shared;

use tokio::net::TcpListener;

use shared::config::{load_config, resolve_dist_dir};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::logging::init_tracing()?;

    let config = load_config()?;
    let dist_dir = resolve_dist_dir(&config);
    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html; run `trunk build` in crates/frontend first",
            dist_dir.display()
        );
    }
    tracing::info!("Serving frontend from {}", dist_dir.display());

    let app = routes::configure_routes(&dist_dir);
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
