use serde::{Deserialize, Serialize};

/// dockerize.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockerizeConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Version resolution endpoint; the specifier is appended as a path segment
    #[serde(default = "default_resolver_url")]
    pub url: String,
    /// Request timeout in seconds. When None, the request never times out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Base image repository, tagged with the resolved Node.js version
    #[serde(default = "default_base_image")]
    pub base: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            url: default_resolver_url(),
            timeout_secs: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base: default_base_image(),
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }
}

impl DockerizeConfig {
    /// Load from dockerize.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("dockerize.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_resolver_url() -> String {
    "https://semver.io/node/resolve".to_owned()
}

fn default_base_image() -> String {
    "node".to_owned()
}
