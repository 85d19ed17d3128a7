//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use folio_static::StaticBuilder;

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let build_config = config.build_config(output, minify);
    let result = StaticBuilder::new(build_config).build().await?;

    tracing::info!(
        "Built {} pages ({} projects) and copied {} static files in {}ms",
        result.pages,
        result.projects,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
