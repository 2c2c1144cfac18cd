//! Liveness endpoints for the hosting platform
//!
//! # Endpoints
//!
//! - `GET /` - Static status page
//! - `GET /status` - `{"status": "online", "message": "Bot is running"}`
//!
//! The server runs on its own thread with its own runtime and shares no
//! state with the bot.

use crate::error::{NewsError, Result};
use axum::Router;
use axum::response::{Html, Json};
use axum::routing::get;
use serde::Serialize;
use std::net::SocketAddr;
use std::thread::JoinHandle;
use tower_http::trace::TraceLayer;

const HOME_PAGE: &str = r"
    <h1>🤖 Discord Finance News Bot</h1>
    <p>Bot is running and providing financial news!</p>
    <h2>Features:</h2>
    <ul>
        <li>📈 Crypto News</li>
        <li>📊 Stock News</li>
        <li>💰 Finance News</li>
        <li>🔄 Auto Updates</li>
    </ul>
";

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Create the liveness router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/status", get(status))
        .layer(TraceLayer::new_for_http())
}

async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        message: "Bot is running",
    })
}

/// Serve the liveness router on `addr` until the process exits.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Liveness server listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Start the liveness server on `0.0.0.0:port` in a background thread.
pub fn spawn(port: u16) -> Result<JoinHandle<()>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    std::thread::Builder::new()
        .name("keepalive".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to start liveness runtime");
                    return;
                }
            };

            if let Err(e) = runtime.block_on(serve(addr)) {
                tracing::error!(error = %e, "Liveness server stopped");
            }
        })
        .map_err(NewsError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::serve as serve_local;

    #[test]
    fn test_status_response_serialization() {
        let response = StatusResponse {
            status: "online",
            message: "Bot is running",
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"status":"online","message":"Bot is running"}"#);
    }

    #[tokio::test]
    async fn test_endpoints() {
        let base = serve_local(router()).await;
        let client = reqwest::Client::new();

        let home = client.get(format!("{base}/")).send().await.unwrap();
        assert!(home.status().is_success());
        assert!(home.text().await.unwrap().contains("Finance News Bot"));

        let status: serde_json::Value = client
            .get(format!("{base}/status"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status["status"], "online");
        assert_eq!(status["message"], "Bot is running");

        let missing = client.get(format!("{base}/nope")).send().await.unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    }
}
