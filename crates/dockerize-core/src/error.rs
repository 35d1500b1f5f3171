use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── package.json ──
    #[error("{dir} does not contain a package.json file")]
    ManifestMissing { dir: PathBuf },

    #[error("failed to read {path}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid package.json at {path}")]
    ManifestInvalid {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("missing \"name\" in {0}; the image path is namespaced by the package name")]
    MissingPackageName(PathBuf),
}
