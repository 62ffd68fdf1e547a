//! Deployment manifests
//!
//! Replicated pods selected by their `name` label. Pod template labels carry
//! both `name` and `group`.

use super::{resource_metadata, Manifest, ResourceStrategy};
use crate::config::BuildConfig;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;

/// Deployment strategy handler
pub struct DeploymentStrategy;

impl ResourceStrategy for DeploymentStrategy {
    fn name(&self) -> &'static str {
        "deployment"
    }

    fn build(&self, config: &BuildConfig, containers: Vec<Container>) -> Manifest {
        Manifest::Deployment(build_deployment(config, containers))
    }
}

pub fn build_deployment(config: &BuildConfig, containers: Vec<Container>) -> Deployment {
    let name = config.resolved_name().to_string();
    let group = config.resolved_group().to_string();

    let pod_labels = BTreeMap::from([
        ("name".to_string(), name.clone()),
        ("group".to_string(), group),
    ]);

    Deployment {
        metadata: resource_metadata(config),
        spec: Some(DeploymentSpec {
            replicas: Some(config.num_replicas),
            selector: LabelSelector {
                match_labels: Some(BTreeMap::from([("name".to_string(), name)])),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(pod_labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        status: None,
    }
}

#[cfg(test)]
#[path = "deployment_test.rs"]
mod tests;
