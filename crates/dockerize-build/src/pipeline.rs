use std::future::Future;
use std::path::Path;

use dockerize_core::{BuildCommand, DockerizeConfig, ProjectDescriptor, VersionSpecifier};
use dockerize_resolve::{HttpFetcher, ResolveError, VersionResolver};

use crate::dockerfile::DockerfileGenerator;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Project(#[from] dockerize_core::Error),

    #[error(
        "cannot determine CMD for Dockerfile; set a \"start\" script or the \"main\" attribute in package.json"
    )]
    NoStartCommand,

    #[error("unable to get node version for base image from {endpoint}")]
    VersionResolution {
        endpoint: String,
        source: ResolveError,
    },

    #[error("node version resolution was cancelled")]
    Cancelled,
}

/// Dockerfile text together with the project it was generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDockerfile {
    /// `name` from the package.json the text was rendered from.
    pub project_name: String,
    pub content: String,
}

/// Generate the Dockerfile text for the Node.js project in `project_dir`.
///
/// Nothing is written; on error no text is produced.
pub async fn generate<F: HttpFetcher>(
    project_dir: &Path,
    config: &DockerizeConfig,
    resolver: &VersionResolver<F>,
) -> Result<GeneratedDockerfile, GenerateError> {
    generate_until(project_dir, config, resolver, std::future::pending::<()>()).await
}

/// Like [`generate`], but gives up with [`GenerateError::Cancelled`] if
/// `cancel` completes before the version lookup does.
pub async fn generate_until<F, C>(
    project_dir: &Path,
    config: &DockerizeConfig,
    resolver: &VersionResolver<F>,
    cancel: C,
) -> Result<GeneratedDockerfile, GenerateError>
where
    F: HttpFetcher,
    C: Future<Output = ()>,
{
    let descriptor = ProjectDescriptor::load(project_dir)?;

    // Checked before the lookup: a Dockerfile without CMD is useless.
    let command = BuildCommand::resolve(&descriptor).ok_or(GenerateError::NoStartCommand)?;

    let (specifier, source) = VersionSpecifier::select(project_dir, &descriptor);
    let env = dockerize_core::env_file::load(project_dir);
    tracing::info!(
        project = %descriptor.name,
        specifier = %specifier,
        source = ?source,
        env_entries = env.len(),
        "resolving node version"
    );

    let version = tokio::select! {
        biased;
        () = cancel => {
            tracing::warn!(specifier = %specifier, "version lookup cancelled");
            return Err(GenerateError::Cancelled);
        }
        resolved = resolver.resolve(&specifier) => {
            resolved.map_err(|e| GenerateError::VersionResolution {
                endpoint: resolver.endpoint().to_owned(),
                source: e,
            })?
        }
    };

    let generator = DockerfileGenerator::new(
        &config.image.base,
        &version,
        &env,
        &descriptor.name,
        &command,
    );
    let content = generator.render();

    Ok(GeneratedDockerfile {
        project_name: descriptor.name,
        content,
    })
}
