use serde::Deserialize;
use std::path::Path;

/// Runtime-relevant metadata extracted from the project's `package.json`.
///
/// Loaded fresh for every pipeline run; nothing is cached across calls.
///
/// # Examples
///
/// ```
/// use dockerize_core::ProjectDescriptor;
///
/// let descriptor = ProjectDescriptor {
///     name: "my-app".to_owned(),
///     entrypoint: Some("index.js".to_owned()),
///     start_script: None,
///     runtime_constraint: Some("^18".to_owned()),
/// };
/// assert_eq!(descriptor.name, "my-app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// `name`
    pub name: String,
    /// `main`
    pub entrypoint: Option<String>,
    /// `scripts.start`
    pub start_script: Option<String>,
    /// `engines.node`
    pub runtime_constraint: Option<String>,
}

#[derive(Deserialize)]
struct PackageJson {
    name: Option<String>,
    main: Option<String>,
    scripts: Option<ScriptsSection>,
    engines: Option<EnginesSection>,
}

#[derive(Deserialize)]
struct ScriptsSection {
    start: Option<String>,
}

#[derive(Deserialize)]
struct EnginesSection {
    node: Option<String>,
}

impl ProjectDescriptor {
    /// Read `package.json` from the given project directory.
    ///
    /// # Errors
    ///
    /// - [`Error::ManifestMissing`](crate::Error::ManifestMissing) if there is no `package.json`
    /// - [`Error::ManifestRead`](crate::Error::ManifestRead) if the file cannot be read
    /// - [`Error::ManifestInvalid`](crate::Error::ManifestInvalid) if it is not valid JSON
    ///   or a known field has the wrong type
    /// - [`Error::MissingPackageName`](crate::Error::MissingPackageName) if `name` is absent or empty
    pub fn load(project_dir: &Path) -> crate::Result<Self> {
        let manifest_path = project_dir.join("package.json");
        if !manifest_path.is_file() {
            return Err(crate::Error::ManifestMissing {
                dir: project_dir.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(&manifest_path).map_err(|e| crate::Error::ManifestRead {
                path: manifest_path.clone(),
                source: e,
            })?;

        let parsed: PackageJson =
            serde_json::from_str(&content).map_err(|e| crate::Error::ManifestInvalid {
                path: manifest_path.clone(),
                source: e,
            })?;

        let name = non_empty(parsed.name)
            .ok_or_else(|| crate::Error::MissingPackageName(manifest_path.clone()))?;

        let descriptor = Self {
            name,
            entrypoint: non_empty(parsed.main),
            start_script: non_empty(parsed.scripts.and_then(|s| s.start)),
            runtime_constraint: non_empty(parsed.engines.and_then(|e| e.node)),
        };

        tracing::debug!(
            path = %manifest_path.display(),
            name = %descriptor.name,
            main = ?descriptor.entrypoint,
            start = ?descriptor.start_script,
            engines_node = ?descriptor.runtime_constraint,
            "package.json loaded"
        );

        Ok(descriptor)
    }
}

// package.json fields that are present but empty behave as if unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
