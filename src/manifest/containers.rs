use k8s_openapi::api::core::v1::Container;

/// Build `count` containers sharing one synthetic image
///
/// Container `i` (1-based) is named `{image_base}{i}` and runs
/// `{registry_host}/{image_base}:{i}`.
pub fn build_containers(image_base: &str, registry_host: &str, count: u32) -> Vec<Container> {
    (1..=count)
        .map(|i| Container {
            name: format!("{image_base}{i}"),
            image: Some(format!("{registry_host}/{image_base}:{i}")),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containers_are_numbered_from_one() {
        let containers = build_containers("3-containers-1-referrers", "docker.io", 3);

        assert_eq!(containers.len(), 3);
        for (idx, container) in containers.iter().enumerate() {
            let i = idx + 1;
            assert_eq!(container.name, format!("3-containers-1-referrers{i}"));
            assert_eq!(
                container.image.as_deref(),
                Some(format!("docker.io/3-containers-1-referrers:{i}").as_str())
            );
        }
    }

    #[test]
    fn test_registry_host_prefixes_image() {
        let containers = build_containers("1-containers-1-referrers", "myregistry.azurecr.io", 1);

        assert_eq!(
            containers[0].image.as_deref(),
            Some("myregistry.azurecr.io/1-containers-1-referrers:1")
        );
    }

    #[test]
    fn test_zero_count_yields_no_containers() {
        assert!(build_containers("x", "docker.io", 0).is_empty());
    }

    #[test]
    fn test_only_name_and_image_are_set() {
        let containers = build_containers("1-containers-1-referrers", "docker.io", 1);

        assert!(containers[0].command.is_none());
        assert!(containers[0].resources.is_none());
        assert!(containers[0].ports.is_none());
    }
}
