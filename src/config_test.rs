#![allow(clippy::unwrap_used)] // Tests can use unwrap for brevity

use super::*;

#[test]
fn test_default_config_matches_cli_defaults() {
    let config = BuildConfig::default();

    assert_eq!(config.resource_type, ResourceType::Deployment);
    assert_eq!(config.num_containers, 1);
    assert_eq!(config.num_replicas, 1);
    assert_eq!(config.num_referrers, 1);
    assert_eq!(config.registry_host, "docker.io");
    assert!(config.namespace.is_none());
    assert!(config.output_path.is_none());
}

#[test]
fn test_resource_type_parses_known_values() {
    assert_eq!(
        "deployment".parse::<ResourceType>().unwrap(),
        ResourceType::Deployment
    );
    assert_eq!("job".parse::<ResourceType>().unwrap(), ResourceType::Job);
}

#[test]
fn test_resource_type_rejects_unknown_values() {
    for value in ["pod", "bogus", "Deployment", ""] {
        let err = value.parse::<ResourceType>().unwrap_err();
        match err {
            ManifestError::InvalidResourceType(v) => assert_eq!(v, value),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn test_invalid_resource_type_message_names_value() {
    let err = "pod".parse::<ResourceType>().unwrap_err();
    assert_eq!(err.to_string(), "invalid resource type: pod");
}

#[test]
fn test_resource_type_api_version_and_kind() {
    assert_eq!(ResourceType::Deployment.api_version(), "apps/v1");
    assert_eq!(ResourceType::Deployment.kind(), "Deployment");
    assert_eq!(ResourceType::Job.api_version(), "batch/v1");
    assert_eq!(ResourceType::Job.kind(), "Job");
}

#[test]
fn test_image_base_uses_container_and_referrer_counts() {
    let config = BuildConfig {
        num_containers: 2,
        num_referrers: 5,
        ..Default::default()
    };

    assert_eq!(config.image_base(), "2-containers-5-referrers");
}

#[test]
fn test_missing_name_and_group_resolve_to_placeholders() {
    let config = BuildConfig::default();
    assert_eq!(config.resolved_name(), "{{.Name}}");
    assert_eq!(config.resolved_group(), "{{.Group}}");

    // Empty strings count as unset
    let config = BuildConfig {
        name: Some(String::new()),
        group: Some(String::new()),
        namespace: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(config.resolved_name(), NAME_PLACEHOLDER);
    assert_eq!(config.resolved_group(), GROUP_PLACEHOLDER);
    assert_eq!(config.namespace(), None);
}

#[test]
fn test_explicit_values_are_used() {
    let config = BuildConfig {
        name: Some("load".to_string()),
        group: Some("g1".to_string()),
        namespace: Some("perf".to_string()),
        ..Default::default()
    };

    assert_eq!(config.resolved_name(), "load");
    assert_eq!(config.resolved_group(), "g1");
    assert_eq!(config.namespace(), Some("perf"));
}

#[test]
fn test_validate_rejects_non_positive_counts() {
    let zero_containers = BuildConfig {
        num_containers: 0,
        ..Default::default()
    };
    assert!(matches!(
        zero_containers.validate(),
        Err(ManifestError::InvalidCount {
            field: "num-containers",
            ..
        })
    ));

    let negative_replicas = BuildConfig {
        num_replicas: -3,
        ..Default::default()
    };
    assert!(matches!(
        negative_replicas.validate(),
        Err(ManifestError::InvalidCount {
            field: "num-replicas",
            value: -3
        })
    ));

    let zero_referrers = BuildConfig {
        num_referrers: 0,
        ..Default::default()
    };
    assert!(zero_referrers.validate().is_err());

    assert!(BuildConfig::default().validate().is_ok());
}
