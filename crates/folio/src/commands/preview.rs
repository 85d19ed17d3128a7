//! Preview server command.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Router,
};

/// A built site and the path it is mounted at.
struct Preview {
    dir: PathBuf,
    site_root: String,
    not_found: String,
}

/// Run the preview command.
pub async fn run(port: u16, dir: PathBuf, base_url: &str) -> Result<()> {
    if !folio_static::is_built(&dir) {
        anyhow::bail!(
            "No built site in {}. Run 'folio build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    let not_found = fs::read_to_string(dir.join("404.html"))
        .with_context(|| format!("Failed to read {}", dir.join("404.html").display()))?;
    let preview = Arc::new(Preview {
        dir,
        site_root: folio_server::site_root(base_url),
        not_found,
    });

    let url = format!("http://{}{}", addr, preview.site_root);
    tracing::info!("Serving {} at {}", preview.dir.display(), url);

    let app = Router::new().fallback(preview_handler).with_state(preview);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Open browser
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn preview_handler(State(preview): State<Arc<Preview>>, request: Request) -> Response {
    match folio_server::serve_static(&preview.dir, &preview.site_root, request).await {
        Ok(Some(response)) => response,
        Ok(None) => (StatusCode::NOT_FOUND, Html(preview.not_found.clone())).into_response(),
        Err(e) => {
            tracing::error!("Failed to serve {}: {}", preview.dir.display(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
