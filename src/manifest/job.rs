//! Job manifests
//!
//! Indexed completion with one completion per replica, all running in parallel.

use super::{resource_metadata, Manifest, ResourceStrategy};
use crate::config::BuildConfig;
use k8s_openapi::api::batch::v1::{Job, JobSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

pub const COMPLETION_MODE_INDEXED: &str = "Indexed";
pub const RESTART_POLICY_ON_FAILURE: &str = "OnFailure";

/// Job strategy handler
pub struct JobStrategy;

impl ResourceStrategy for JobStrategy {
    fn name(&self) -> &'static str {
        "job"
    }

    fn build(&self, config: &BuildConfig, containers: Vec<Container>) -> Manifest {
        Manifest::Job(build_job(config, containers))
    }
}

pub fn build_job(config: &BuildConfig, containers: Vec<Container>) -> Job {
    // Only the group label here; Deployments also get "name"
    let pod_labels = BTreeMap::from([("group".to_string(), config.resolved_group().to_string())]);

    Job {
        metadata: resource_metadata(config),
        spec: Some(JobSpec {
            parallelism: Some(config.num_replicas),
            completions: Some(config.num_replicas),
            completion_mode: Some(COMPLETION_MODE_INDEXED.to_string()),
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(pod_labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers,
                    restart_policy: Some(RESTART_POLICY_ON_FAILURE.to_string()),
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        status: None,
    }
}

#[cfg(test)]
#[path = "job_test.rs"]
mod tests;
