mod build;
mod generate;

use anyhow::Context;
use dockerize_build::{GeneratedDockerfile, output};
use dockerize_core::DockerizeConfig;
use dockerize_resolve::VersionResolver;
use std::path::{Path, PathBuf};

pub use build::build;
pub use generate::generate;

/// Run the pipeline for `project_dir` and write the Dockerfile.
/// Ctrl-C during the version lookup aborts without writing anything.
pub(crate) async fn write_generated(
    project_dir: &Path,
) -> anyhow::Result<(PathBuf, GeneratedDockerfile)> {
    let path = output::dockerfile_path(project_dir);
    let generated = render(project_dir)
        .await
        .with_context(|| format!("Unable to create {}", path.display()))?;

    let written = output::write_dockerfile(project_dir, &generated.content)
        .with_context(|| format!("Unable to create {}", path.display()))?;

    Ok((written, generated))
}

pub(crate) async fn render(project_dir: &Path) -> anyhow::Result<GeneratedDockerfile> {
    let config = DockerizeConfig::load(project_dir)?;
    let resolver = VersionResolver::new(&config.resolver)?;

    let generated =
        dockerize_build::generate_until(project_dir, &config, &resolver, ctrl_c()).await?;
    Ok(generated)
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; lookup cannot be interrupted");
        std::future::pending::<()>().await;
    }
}
