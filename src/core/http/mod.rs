//! HTTP listener for the REST API.
//!
//! Plain JSON over HTTP using axum. Routing and handlers live in
//! [`routes`]; error-to-status mapping lives in [`response`].

pub mod error;
pub mod response;
pub mod routes;

pub use error::{HttpError, HttpResult};

use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::config::HttpConfig;
use super::server::GameServer;

/// HTTP listener.
pub struct HttpServer {
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new HTTP listener with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the listener until the process is stopped.
    pub async fn run(self, server: GameServer) -> HttpResult<()> {
        let addr = self.address();

        let mut app = routes::router(server);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| HttpError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (REST over HTTP, CORS {})", addr, cors_status);
        info!("  → Probe:   GET /test_connection");
        info!("  → Sprites: POST /upload_sprite, GET /sprites, DELETE /delete_sprite/{{id}}");
        info!("  → Audio:   POST /upload_audio, GET /audio, DELETE /delete_audio/{{id}}");
        info!("  → Scores:  POST /player_score, GET /player_scores, DELETE /delete_score/{{id}}");

        axum::serve(listener, app)
            .await
            .map_err(|e| HttpError::serve(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_joins_host_and_port() {
        let server = HttpServer::new(HttpConfig {
            host: "0.0.0.0".to_string(),
            port: 9000,
            enable_cors: true,
        });
        assert_eq!(server.address(), "0.0.0.0:9000");
    }
}
