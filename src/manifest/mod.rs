//! Manifest construction for load-testing workloads
//!
//! This module turns a `BuildConfig` into a typed Kubernetes object and renders it as YAML.
//! Each resource type has its own strategy:
//! - DeploymentStrategy: replicated pods with a name-based selector
//! - JobStrategy: indexed job with one completion per replica
//!
//! Rendering happens fully in memory, so a failure never leaves partial output behind.

pub mod containers;
pub mod deployment;
pub mod job;

use crate::config::{BuildConfig, ResourceType};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

pub use containers::build_containers;
pub use deployment::DeploymentStrategy;
pub use job::JobStrategy;

/// Errors produced while building or emitting a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid resource type: {0}")]
    InvalidResourceType(String),

    #[error("invalid {field}: {value} (must be at least 1)")]
    InvalidCount { field: &'static str, value: i64 },

    #[error("failed to serialize manifest: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A generated Kubernetes object
///
/// Serializes as the bare object, so the YAML carries only its own
/// `apiVersion`/`kind` markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Manifest {
    Deployment(Deployment),
    Job(Job),
}

impl Manifest {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Manifest::Deployment(_) => ResourceType::Deployment,
            Manifest::Job(_) => ResourceType::Job,
        }
    }

    /// Containers of the pod template, in order
    pub fn containers(&self) -> &[Container] {
        let pod_spec = match self {
            Manifest::Deployment(d) => d.spec.as_ref().and_then(|s| s.template.spec.as_ref()),
            Manifest::Job(j) => j.spec.as_ref().and_then(|s| s.template.spec.as_ref()),
        };
        pod_spec.map(|p| p.containers.as_slice()).unwrap_or(&[])
    }
}

/// Strategy trait for the supported resource types
///
/// Implementations are pure: the same config and containers always produce
/// the same object.
pub trait ResourceStrategy {
    /// Strategy name for logging
    fn name(&self) -> &'static str;

    /// Build the object around an already constructed container list
    fn build(&self, config: &BuildConfig, containers: Vec<Container>) -> Manifest;
}

/// Select the strategy for a resource type
pub fn select_strategy(resource_type: ResourceType) -> Box<dyn ResourceStrategy> {
    match resource_type {
        ResourceType::Deployment => Box::new(DeploymentStrategy),
        ResourceType::Job => Box::new(JobStrategy),
    }
}

/// Object metadata shared by every generated resource
///
/// `namespace` stays `None` when unset so the field is left out of the YAML.
pub fn resource_metadata(config: &BuildConfig) -> ObjectMeta {
    ObjectMeta {
        name: Some(config.resolved_name().to_string()),
        namespace: config.namespace().map(str::to_string),
        labels: Some(BTreeMap::from([(
            "group".to_string(),
            config.resolved_group().to_string(),
        )])),
        ..Default::default()
    }
}

/// Build the typed object described by `config`
pub fn build_manifest(config: &BuildConfig) -> Result<Manifest, ManifestError> {
    config.validate()?;

    let image_base = config.image_base();
    let containers = build_containers(&image_base, &config.registry_host, config.num_containers);

    let strategy = select_strategy(config.resource_type);
    debug!(
        strategy = strategy.name(),
        image_base = %image_base,
        containers = containers.len(),
        "Building manifest"
    );

    Ok(strategy.build(config, containers))
}

/// Render a manifest as a YAML document
pub fn render(manifest: &Manifest) -> Result<String, ManifestError> {
    Ok(serde_yaml::to_string(manifest)?)
}

/// Build and render in one step
///
/// Returns the YAML text; the caller decides where it goes.
pub fn build(config: &BuildConfig) -> Result<String, ManifestError> {
    let manifest = build_manifest(config)?;
    let yaml = render(&manifest)?;

    info!(
        kind = %config.resource_type.kind(),
        name = config.resolved_name(),
        containers = config.num_containers,
        replicas = config.num_replicas,
        "Manifest generated"
    );

    Ok(yaml)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
