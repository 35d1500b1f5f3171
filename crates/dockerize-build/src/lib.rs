//! Dockerfile synthesis, output, and `docker build` for dockerize.
//!
//! # Pipeline
//!
//! ```text
//! dockerize generate <dir>
//!   1. Descriptor ── package.json → ProjectDescriptor
//!   2. Command    ── scripts.start → npm start | main → node <main> | fail
//!   3. Specifier  ── .nvmrc → engines.node → "stable"
//!   4. Env        ── .env → ENV lines (never fatal)
//!   5. Resolve    ── GET <resolver>/<specifier> → concrete version
//!   6. Render     ── DockerfileGenerator::render()
//! ```
//!
//! The command is resolved before the network call so that a project with
//! no startup command fails without contacting the resolution service.
//!
//! # Output format
//!
//! Lines are always separated by `\n`, whatever the host platform, and the
//! last line is terminated too.

pub mod docker;
pub mod dockerfile;
pub mod output;
pub mod pipeline;

pub use dockerfile::DockerfileGenerator;
pub use pipeline::{GenerateError, GeneratedDockerfile, generate, generate_until};
