//! ServerBuilder for fluent API to build the listing HTTP server

use super::handlers::AppState;
use super::router::{build_health_routes, build_property_routes};
use crate::core::{EnquirySink, LogEnquirySink, PropertyStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the listing HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(PropertyStore::new(JsonFileBackend::new("data/properties.json")))
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<PropertyStore>>,
    enquiry_sink: Option<Arc<dyn EnquirySink>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            enquiry_sink: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the property store (required)
    pub fn with_store(self, store: PropertyStore) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    /// Set a property store that is also held elsewhere
    pub fn with_shared_store(mut self, store: Arc<PropertyStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set where enquiries are delivered (defaults to [`LogEnquirySink`])
    pub fn with_enquiry_sink(mut self, sink: impl EnquirySink + 'static) -> Self {
        self.enquiry_sink = Some(Arc::new(sink));
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for routes outside the listing API, such as serving the
    /// browser UI's static assets.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared handler state
    pub fn build_state(&mut self) -> Result<AppState> {
        let store = self
            .store
            .take()
            .ok_or_else(|| anyhow::anyhow!("PropertyStore is required. Call .with_store()"))?;

        let enquiries = self
            .enquiry_sink
            .take()
            .unwrap_or_else(|| Arc::new(LogEnquirySink));

        Ok(AppState { store, enquiries })
    }

    /// Build the final router
    ///
    /// This generates:
    /// - Health check routes
    /// - Listing routes (`/properties`, `/enquiry`)
    /// - Custom routes
    ///
    /// wrapped in request tracing and a permissive CORS policy.
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;

        let mut app = build_health_routes().merge(build_property_routes(state));
        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryBackend;

    #[test]
    fn test_build_without_store_fails() {
        let result = ServerBuilder::new().build();
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("PropertyStore is required"));
    }

    #[test]
    fn test_build_with_store_succeeds() {
        let result = ServerBuilder::new()
            .with_store(PropertyStore::new(InMemoryBackend::new()))
            .with_custom_routes(Router::new())
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_enquiry_sink_is_installed() {
        let mut builder =
            ServerBuilder::new().with_store(PropertyStore::new(InMemoryBackend::new()));
        assert!(builder.build_state().is_ok());
    }
}
