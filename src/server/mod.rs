//! Dashboard Web Server
//!
//! Single HTTP server for the dashboard UI, the read API, and the PDF
//! export. One router, one port; the store and the renderer are constructed
//! here and injected into handlers through shared state.

pub mod api;

use anyhow::Result;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::render::ChromiumRenderer;
use crate::store::{seed, ResultStore};
use api::AppState;

/// Dashboard server configuration
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When set, seed N deterministic synthetic results instead of the
    /// fixed demo dataset
    pub synthetic: Option<usize>,
    /// Seed for the synthetic generator
    pub seed: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            synthetic: None,
            seed: 1,
        }
    }
}

/// Main dashboard server
pub struct DashboardServer {
    config: ServerConfig,
}

impl DashboardServer {
    /// Create a new dashboard server
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Seed the store and serve until the process is stopped
    pub async fn start(&self) -> Result<()> {
        let store = ResultStore::new();
        match self.config.synthetic {
            Some(count) => seed::seed_synthetic(&store, self.config.seed, count),
            None => seed::seed_sample_data(&store),
        }

        let state = Arc::new(AppState {
            store,
            renderer: Arc::new(ChromiumRenderer::new()),
        });

        // Build router
        let app = Router::new()
            .route("/", get(serve_index))
            .merge(api::api_router())
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;

        println!("\n📊 Dashboard started!");
        println!("   Open: http://{}", addr);
        match self.config.synthetic {
            Some(count) => println!(
                "   Data: {} synthetic results (seed {})",
                count, self.config.seed
            ),
            None => println!("   Data: fixed demo suite (7 tests)"),
        }
        println!("\n   Press Ctrl+C to stop.\n");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app.into_make_service()).await?;

        Ok(())
    }
}

/// Serve the dashboard page with inlined CSS/JS
async fn serve_index() -> impl IntoResponse {
    let mut html = include_str!("ui/dashboard.html").to_string();
    let css = include_str!("ui/style.css");
    let js = include_str!("ui/script.js");

    // Inline assets
    html = html.replace("</head>", &format!("<style>{}</style></head>", css));
    html = html.replace("</body>", &format!("<script>{}</script></body>", js));

    Html(html)
}
