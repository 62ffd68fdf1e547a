pub mod cli;
pub mod config;
pub mod manifest;
pub mod output;

pub use crate::config::{BuildConfig, ResourceType};
pub use crate::manifest::{build, build_manifest, Manifest, ManifestError};
