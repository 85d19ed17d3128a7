//! Portfolio server implementation.

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path as UrlPath, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use folio_content::SiteContent;
use folio_static::{AssetPipeline, Document, PageStatus, RenderError, Renderer};

/// Configuration for the portfolio server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory served for every path that is not a page
    pub static_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),
}

/// Read-only state shared by every request.
pub struct AppState {
    content: SiteContent,
    renderer: Renderer,
    stylesheet: String,
    static_dir: PathBuf,
    site_root: String,
}

impl AppState {
    pub fn new(content: SiteContent, renderer: Renderer, static_dir: impl Into<PathBuf>) -> Self {
        let site_root = site_root(&renderer.site().base_url);
        Self {
            content,
            renderer,
            stylesheet: AssetPipeline::stylesheet(false),
            static_dir: static_dir.into(),
            site_root,
        }
    }
}

/// Portfolio server.
pub struct PortfolioServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl PortfolioServer {
    /// Create a server over already-validated content.
    pub fn new(config: ServerConfig, content: SiteContent, renderer: Renderer) -> Self {
        let state = AppState::new(content, renderer, config.static_dir.clone());
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let address = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = address
            .parse()
            .map_err(|_| ServerError::InvalidAddress(address.clone()))?;

        if !self.config.static_dir.exists() {
            tracing::warn!(
                "Static directory not found: {}",
                self.config.static_dir.display()
            );
        }

        let site_root = self.state.site_root.clone();
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        let url = format!("http://{}{}", addr, site_root);
        tracing::info!("Serving portfolio at {}", url);

        if self.config.open {
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}

/// Path the site is mounted at: `/` or `/name/`.
pub fn site_root(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Build the router: page routes and the stylesheet under the site root,
/// then static files, with a rendered 404 as the last resort.
pub fn router(state: Arc<AppState>) -> Router {
    let root = state.site_root.clone();

    let mut app = Router::new()
        .route(&root, get(home_handler))
        .route(&format!("{root}projects"), get(listing_handler))
        .route(&format!("{root}projects/{{slug}}"), get(project_handler))
        .route(&format!("{root}demos"), get(demos_handler))
        .route(&format!("{root}assets/main.css"), get(stylesheet_handler));

    if root != "/" {
        app = app.route(root.trim_end_matches('/'), get(home_handler));
    }

    app.fallback(static_handler).with_state(state)
}

/// Serve a file from `dir` for a request path under `site_root`.
///
/// Returns `Ok(None)` when the path is outside the site root or no file
/// matches.
pub async fn serve_static(
    dir: &Path,
    site_root: &str,
    request: Request,
) -> io::Result<Option<Response>> {
    let Some(request) = strip_site_root(request, site_root) else {
        return Ok(None);
    };

    let mut response = ServeDir::new(dir).try_call(request).await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    // Directory redirects point at the stripped path
    if response.status().is_redirection() {
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|location| location.starts_with('/'))
            .map(|location| format!("{}{}", site_root.trim_end_matches('/'), location));

        if let Some(value) = location.and_then(|location| HeaderValue::from_str(&location).ok()) {
            response.headers_mut().insert(header::LOCATION, value);
        }
    }

    Ok(Some(response.map(Body::new)))
}

/// Rewrite the request URI relative to the site root.
fn strip_site_root(mut request: Request, site_root: &str) -> Option<Request> {
    let uri = request.uri();
    let rest = uri.path().strip_prefix(site_root)?;
    let relative = match uri.query() {
        Some(query) => format!("/{}?{}", rest, query),
        None => format!("/{}", rest),
    };

    *request.uri_mut() = relative.parse().ok()?;
    Some(request)
}

async fn home_handler(State(state): State<Arc<AppState>>) -> Response {
    respond(state.renderer.render_home(&state.content))
}

async fn listing_handler(State(state): State<Arc<AppState>>) -> Response {
    respond(state.renderer.render_listing(&state.content.catalog))
}

async fn project_handler(
    State(state): State<Arc<AppState>>,
    UrlPath(slug): UrlPath<String>,
) -> Response {
    respond(state.renderer.render_project(state.content.catalog.find(&slug)))
}

async fn demos_handler(State(state): State<Arc<AppState>>) -> Response {
    respond(state.renderer.render_demos(&state.content.catalog))
}

async fn static_handler(State(state): State<Arc<AppState>>, request: Request) -> Response {
    match serve_static(&state.static_dir, &state.site_root, request).await {
        Ok(Some(response)) => response,
        Ok(None) => respond(state.renderer.render_not_found()),
        Err(e) => {
            tracing::error!("Failed to serve static file: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn stylesheet_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.stylesheet.clone(),
    )
}

/// Turn a render outcome into an HTTP response.
fn respond(result: Result<Document, RenderError>) -> Response {
    match result {
        Ok(doc) => {
            let status = match doc.status {
                PageStatus::Ok => StatusCode::OK,
                PageStatus::NotFound => StatusCode::NOT_FOUND,
            };
            (status, Html(doc.html)).into_response()
        }
        Err(e) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use folio_content::{Catalog, Profile};
    use folio_static::{NavConfig, Navigation, SiteMeta};
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    const PROJECTS: &str = r#"[
        {
            "slug": "debate-simulator",
            "title": "Database Debate Simulator",
            "description": "LLMs debate.",
            "skills": ["LangChain", "FAISS"],
            "githubUrl": "https://github.com/x/y"
        }
    ]"#;

    fn state() -> Arc<AppState> {
        state_at("/", Path::new("static"))
    }

    fn state_at(base_url: &str, static_dir: &Path) -> Arc<AppState> {
        let profile = Profile::parse("---\nname: Thomas Compton\nheadline: Data Scientist\n---\n").unwrap();
        let content = SiteContent::new(profile, Catalog::from_json(PROJECTS).unwrap()).unwrap();
        let site = SiteMeta {
            base_url: base_url.to_string(),
            ..SiteMeta::default()
        };
        let renderer = Renderer::new(site.clone(), Navigation::new(&site.base_url, &NavConfig::default()));

        Arc::new(AppState::new(content, renderer, static_dir))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn serves_project_detail() {
        let response = project_handler(State(state()), UrlPath("debate-simulator".to_string())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Database Debate Simulator"));
    }

    #[tokio::test]
    async fn unknown_project_is_404_page() {
        let response = project_handler(State(state()), UrlPath("missing".to_string())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Project not found."));
    }

    #[tokio::test]
    async fn serves_listing_and_home() {
        let state = state();

        let listing = listing_handler(State(Arc::clone(&state))).await;
        assert_eq!(listing.status(), StatusCode::OK);
        assert!(body_text(listing).await.contains("project-debate-simulator"));

        let home = home_handler(State(state)).await;
        assert_eq!(home.status(), StatusCode::OK);
        assert!(body_text(home).await.contains("Thomas Compton"));
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let response = stylesheet_handler(State(state())).await.into_response();

        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/css; charset=utf-8"
        );
        assert!(body_text(response).await.contains(".project-card"));
    }

    /// Minimal HTTP/1.1 GET over a raw socket.
    async fn spawn(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    async fn http_get(addr: SocketAddr, path: &str) -> Vec<u8> {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn router_serves_static_files_and_404s() {
        let temp = tempdir().unwrap();
        let pdf = b"%PDF-1.4 binary \x00\xff";
        fs::write(temp.path().join("cv.pdf"), pdf).unwrap();

        let addr = spawn(router(state_at("/", temp.path()))).await;

        let cv = http_get(addr, "/cv.pdf").await;
        assert!(cv.starts_with(b"HTTP/1.1 200"));
        assert!(cv.ends_with(pdf));

        let missing = http_get(addr, "/nope.txt").await;
        assert!(missing.starts_with(b"HTTP/1.1 404"));
        assert!(String::from_utf8_lossy(&missing).contains("Page not found."));

        let page = http_get(addr, "/projects/missing").await;
        assert!(page.starts_with(b"HTTP/1.1 404"));
        assert!(String::from_utf8_lossy(&page).contains("Project not found."));
    }

    #[tokio::test]
    async fn router_mounts_pages_under_base_url() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("cv.pdf"), b"%PDF-1.4").unwrap();

        let addr = spawn(router(state_at("/portfolio/", temp.path()))).await;

        for path in [
            "/portfolio/",
            "/portfolio",
            "/portfolio/projects",
            "/portfolio/projects/debate-simulator",
            "/portfolio/demos",
            "/portfolio/assets/main.css",
            "/portfolio/cv.pdf",
        ] {
            let response = http_get(addr, path).await;
            assert!(response.starts_with(b"HTTP/1.1 200"), "{} was not served", path);
        }

        for path in ["/projects", "/cv.pdf", "/portfolio/projects/missing"] {
            let response = http_get(addr, path).await;
            assert!(response.starts_with(b"HTTP/1.1 404"), "{} should be missing", path);
        }
    }

    #[test]
    fn site_root_has_both_slashes() {
        assert_eq!(site_root("/"), "/");
        assert_eq!(site_root(""), "/");
        assert_eq!(site_root("portfolio"), "/portfolio/");
        assert_eq!(site_root("/portfolio/"), "/portfolio/");
    }

    #[tokio::test]
    async fn directory_redirects_keep_base_url() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("papers")).unwrap();
        fs::write(temp.path().join("papers").join("index.html"), "papers").unwrap();

        let addr = spawn(router(state_at("/portfolio/", temp.path()))).await;

        let response = String::from_utf8_lossy(&http_get(addr, "/portfolio/papers").await).to_lowercase();
        assert!(response.starts_with("http/1.1 30"));
        assert!(response.contains("location: /portfolio/papers/"));
    }
}
