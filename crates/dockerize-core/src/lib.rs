//! Core types and configuration for dockerize.
//!
//! This crate reads everything the Dockerfile pipeline needs from a local
//! Node.js project: the `package.json` descriptor ([`ProjectDescriptor`]),
//! `.env` declarations ([`EnvEntry`]), the runtime version specifier
//! ([`VersionSpecifier`]), the startup command ([`BuildCommand`]), and the
//! optional `dockerize.toml` schema ([`DockerizeConfig`]).

pub mod command;
pub mod config;
pub mod env_file;
pub mod error;
pub mod manifest;
pub mod version;

pub use command::BuildCommand;
pub use config::{DockerizeConfig, ImageConfig, ResolverConfig};
pub use env_file::EnvEntry;
pub use error::{Error, Result};
pub use manifest::ProjectDescriptor;
pub use version::{ResolvedVersion, SpecifierSource, VersionSpecifier};
