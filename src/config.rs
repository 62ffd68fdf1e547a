//! Build configuration for manifest generation
//!
//! A `BuildConfig` is the single input to the manifest builder. It is created
//! once per invocation (usually from CLI flags) and never mutated afterwards.

use crate::manifest::ManifestError;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::batch::v1::Job;
use kube::Resource;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Placeholder emitted when no name is given, filled in by a later templating pass
pub const NAME_PLACEHOLDER: &str = "{{.Name}}";

/// Placeholder emitted when no group is given
pub const GROUP_PLACEHOLDER: &str = "{{.Group}}";

/// Default registry host for the synthetic images
pub const DEFAULT_REGISTRY_HOST: &str = "docker.io";

/// Kind of Kubernetes resource to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceType {
    #[default]
    Deployment,
    Job,
}

impl ResourceType {
    /// Lowercase flag value for this resource type
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Deployment => "deployment",
            ResourceType::Job => "job",
        }
    }

    /// `apiVersion` of the generated object (e.g. "apps/v1")
    pub fn api_version(&self) -> Cow<'static, str> {
        match self {
            ResourceType::Deployment => Deployment::api_version(&()),
            ResourceType::Job => Job::api_version(&()),
        }
    }

    /// `kind` of the generated object (e.g. "Deployment")
    pub fn kind(&self) -> Cow<'static, str> {
        match self {
            ResourceType::Deployment => Deployment::kind(&()),
            ResourceType::Job => Job::kind(&()),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deployment" => Ok(ResourceType::Deployment),
            "job" => Ok(ResourceType::Job),
            other => Err(ManifestError::InvalidResourceType(other.to_string())),
        }
    }
}

/// Input to the manifest builder
///
/// Optional string fields treat `Some("")` the same as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub resource_type: ResourceType,
    pub num_containers: u32,
    /// Replica count, or parallelism/completions for a Job
    pub num_replicas: i32,
    /// Only used to derive the synthetic image name
    pub num_referrers: u32,
    pub registry_host: String,
    /// Absent means the cluster default namespace (field omitted)
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub group: Option<String>,
    /// Absent means standard output
    pub output_path: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            resource_type: ResourceType::default(),
            num_containers: 1,
            num_replicas: 1,
            num_referrers: 1,
            registry_host: DEFAULT_REGISTRY_HOST.to_string(),
            namespace: None,
            name: None,
            group: None,
            output_path: None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl BuildConfig {
    /// Synthetic image base name shared by every container,
    /// e.g. "2-containers-1-referrers"
    pub fn image_base(&self) -> String {
        format!(
            "{}-containers-{}-referrers",
            self.num_containers, self.num_referrers
        )
    }

    /// Resource name, or the `{{.Name}}` placeholder
    pub fn resolved_name(&self) -> &str {
        non_empty(&self.name).unwrap_or(NAME_PLACEHOLDER)
    }

    /// Group label value, or the `{{.Group}}` placeholder
    pub fn resolved_group(&self) -> &str {
        non_empty(&self.group).unwrap_or(GROUP_PLACEHOLDER)
    }

    /// Namespace to set on the object, `None` when it must be omitted
    pub fn namespace(&self) -> Option<&str> {
        non_empty(&self.namespace)
    }

    /// Reject counts that cannot describe a resource
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.num_containers == 0 {
            return Err(ManifestError::InvalidCount {
                field: "num-containers",
                value: 0,
            });
        }
        if self.num_replicas < 1 {
            return Err(ManifestError::InvalidCount {
                field: "num-replicas",
                value: i64::from(self.num_replicas),
            });
        }
        if self.num_referrers == 0 {
            return Err(ManifestError::InvalidCount {
                field: "num-referrers",
                value: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
