//! OctoFit API Client
//!
//! Resolves collection endpoints and fetches them with gloo-net.

use gloo_net::http::Request;
use octofit::{endpoint_url, BackendConfig, Config, FetchError, Resource};
use serde_json::Value;

/// Local storage key that overrides the backend base URL
pub const API_BASE_KEY: &str = "octofit_api_base_url";

/// Variables baked in when the bundle is built
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "OCTOFIT_CODESPACE_NAME" => option_env!("OCTOFIT_CODESPACE_NAME"),
        "CODESPACE_NAME" => option_env!("CODESPACE_NAME"),
        "OCTOFIT_API_BASE_URL" => option_env!("OCTOFIT_API_BASE_URL"),
        "OCTOFIT_API_DOMAIN" => option_env!("OCTOFIT_API_DOMAIN"),
        "OCTOFIT_API_PORT" => option_env!("OCTOFIT_API_PORT"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Base URL saved in local storage, if any
fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(API_BASE_KEY)
        .ok()?
        .filter(|url| !url.is_empty())
}

/// Backend location for this bundle
pub fn backend_config() -> BackendConfig {
    let mut config = Config::default();
    config.apply_overrides(build_env);

    if let Some(base_url) = stored_api_base() {
        config.backend.base_url = Some(base_url);
    }

    config.backend
}

/// Collection URL for `resource`
pub fn endpoint(resource: Resource) -> String {
    endpoint_url(&backend_config(), resource)
}

/// Issue one GET and decode the body
pub async fn fetch_collection(url: &str) -> Result<Value, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
