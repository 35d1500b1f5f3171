//! `docker build` invocation for a generated Dockerfile.

use std::path::Path;

/// Abstraction over docker CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait DockerExecutor: Send + Sync {
    /// Execute a docker command, streaming output to the terminal.
    async fn exec_streaming(&self, args: &[String]) -> Result<(), DockerError>;
}

/// Real docker CLI executor.
pub struct RealExecutor;

impl DockerExecutor for RealExecutor {
    async fn exec_streaming(&self, args: &[String]) -> Result<(), DockerError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new("docker")
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| DockerError::NotFound { source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(DockerError::CommandFailed {
                args: args.to_vec(),
                status: status.to_string(),
            })
        }
    }
}

/// Docker operations, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// `docker build -t <tag> <context_dir>`, using `<context_dir>/Dockerfile`.
    pub async fn build_image(&self, context_dir: &Path, tag: &str) -> Result<(), DockerError> {
        let args = vec![
            "build".to_owned(),
            "-t".to_owned(),
            tag.to_owned(),
            context_dir.display().to_string(),
        ];
        tracing::debug!(?args, "running docker build");
        self.executor.exec_streaming(&args).await
    }
}

/// Image tag derived from a package name.
///
/// Docker repository names must be lowercase, and the `@` of scoped npm
/// packages is not allowed: `@Acme/Web-App` becomes `acme/web-app`.
pub fn image_tag(package_name: &str) -> String {
    package_name.trim_start_matches('@').to_lowercase()
}

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("docker CLI not found; install it from https://docs.docker.com/get-docker/")]
    NotFound { source: std::io::Error },

    #[error("docker command failed: {args:?} ({status})")]
    CommandFailed { args: Vec<String>, status: String },
}
