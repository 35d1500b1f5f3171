use std::path::{Path, PathBuf};

pub const DOCKERFILE_NAME: &str = "Dockerfile";

/// Writes the generated Dockerfile into the project directory, replacing
/// any existing one. Returns the path written.
pub fn write_dockerfile(project_dir: &Path, content: &str) -> Result<PathBuf, OutputError> {
    let path = dockerfile_path(project_dir);
    std::fs::write(&path, content).map_err(|e| OutputError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Dockerfile written");
    Ok(path)
}

pub fn dockerfile_path(project_dir: &Path) -> PathBuf {
    project_dir.join(DOCKERFILE_NAME)
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
