//! Node.js version specifier selection.

use std::fmt;
use std::path::Path;

use crate::ProjectDescriptor;

/// File name of the pinned version file, relative to the project directory.
pub const NVMRC_FILE_NAME: &str = ".nvmrc";

/// Specifier used when neither `.nvmrc` nor `engines.node` is set.
pub const DEFAULT_SPECIFIER: &str = "stable";

/// An abstract Node.js version understood by the resolution service:
/// an exact version, a semver range, or `stable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpecifier(String);

/// A concrete version returned by the resolution service, used verbatim
/// as the base image tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion(String);

/// Where the selected specifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierSource {
    Nvmrc,
    Engines,
    Default,
}

impl VersionSpecifier {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self(specifier.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Select the specifier for a project.
    ///
    /// Priority:
    /// 1. First line of `.nvmrc` (pinned by the developer)
    /// 2. `engines.node` from package.json
    /// 3. `stable`
    ///
    /// Never fails: an unreadable `.nvmrc` is logged and skipped.
    pub fn select(project_dir: &Path, descriptor: &ProjectDescriptor) -> (Self, SpecifierSource) {
        let (specifier, source) = if let Some(pinned) = read_nvmrc(project_dir) {
            (pinned, SpecifierSource::Nvmrc)
        } else if let Some(constraint) = &descriptor.runtime_constraint {
            (constraint.clone(), SpecifierSource::Engines)
        } else {
            (DEFAULT_SPECIFIER.to_owned(), SpecifierSource::Default)
        };

        tracing::debug!(specifier = %specifier, source = ?source, "node version specifier selected");
        (Self(specifier), source)
    }
}

impl fmt::Display for VersionSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ResolvedVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn read_nvmrc(project_dir: &Path) -> Option<String> {
    let path = project_dir.join(NVMRC_FILE_NAME);
    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => content
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read .nvmrc; falling back to package.json"
            );
            None
        }
    }
}
