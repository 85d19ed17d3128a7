//! Portfolio server command.

use anyhow::{Context, Result};
use folio_content::SiteContent;
use folio_server::PortfolioServer;
use folio_static::{Navigation, Renderer};

use crate::config::ConfigFile;

/// Run the server, rendering pages on request.
pub async fn run(config: &ConfigFile, port: Option<u16>, open: bool) -> Result<()> {
    let content_dir = config.content_dir();

    // Content is validated once, before the listener is bound
    let content = SiteContent::load(&content_dir)
        .with_context(|| format!("Invalid content in {}", content_dir.display()))?;

    let site = config.site_meta();
    let nav = Navigation::new(&site.base_url, &config.nav_config());
    let renderer = Renderer::new(site, nav);

    let server_config = config.server_config(port, open);
    tracing::info!("Starting server on port {}", server_config.port);

    PortfolioServer::new(server_config, content, renderer)
        .start()
        .await?;

    Ok(())
}
