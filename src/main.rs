//! propmap server
//!
//! Configuration comes from `PROPMAP_CONFIG` (optional YAML file) with
//! `PROPMAP_BIND`, `PROPMAP_DATA` and `PROPMAP_IO_TIMEOUT_MS` overrides.
//! Log verbosity follows `RUST_LOG`.

use propmap::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("propmap=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let backend = JsonFileBackend::new(&config.data_path);
    let store = PropertyStore::new(backend).with_io_timeout(config.io_timeout());

    let listings = store.load_all().await.len();
    tracing::info!(
        data = %config.data_path.display(),
        listings,
        "Starting propmap v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_store(store)
        .with_enquiry_sink(LogEnquirySink)
        .serve(&config.bind_addr)
        .await
}
