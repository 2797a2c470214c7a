use ferrumkv::{web, MemoryStore, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match ServerConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("FerrumKV starting...");

    let store = MemoryStore::new();

    if let Err(e) = web::run(config.bind_addr, store).await {
        error!("HTTP server error: {:#}", e);
        std::process::exit(1);
    }
}
