//! Endpoint Construction
//!
//! Builds the collection URL for a resource from the backend config.
//! No validation happens here: a missing deployment identifier yields a
//! malformed host and the request fails later in the transport.

use crate::config::BackendConfig;
use crate::resource::Resource;

/// Compute the collection URL for `resource`
pub fn endpoint_url(backend: &BackendConfig, resource: Resource) -> String {
    if let Some(base) = backend.base_url.as_deref() {
        return format!("{}/api/{}/", base.trim_end_matches('/'), resource.segment());
    }

    let name = match backend.codespace_name.as_deref() {
        Some(name) => name,
        None => {
            tracing::warn!(
                resource = %resource,
                "No codespace name configured, endpoint host will be malformed"
            );
            ""
        }
    };

    format!(
        "https://{}-{}.{}/api/{}/",
        name,
        backend.port,
        backend.domain,
        resource.segment()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(name: Option<&str>) -> BackendConfig {
        BackendConfig {
            codespace_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_template_url() {
        let url = endpoint_url(&backend(Some("fluffy-space")), Resource::Activities);
        assert_eq!(url, "https://fluffy-space-8000.app.github.dev/api/activities/");
    }

    #[test]
    fn test_every_resource_path() {
        let config = backend(Some("cs"));
        for resource in Resource::ALL {
            let url = endpoint_url(&config, resource);
            assert!(url.ends_with(&format!("/api/{}/", resource.segment())));
        }
    }

    #[test]
    fn test_missing_name_still_builds() {
        let url = endpoint_url(&backend(None), Resource::Teams);
        assert_eq!(url, "https://-8000.app.github.dev/api/teams/");
    }

    #[test]
    fn test_base_url_override() {
        let config = BackendConfig {
            codespace_name: Some("ignored".to_string()),
            base_url: Some("http://localhost:8000/".to_string()),
            ..Default::default()
        };
        assert_eq!(
            endpoint_url(&config, Resource::Leaderboard),
            "http://localhost:8000/api/leaderboard/"
        );
    }
}
