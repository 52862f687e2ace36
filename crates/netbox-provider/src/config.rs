//! Provider configuration
//!
//! Resolves the provider block (`app_id`, `endpoint`) into an authenticated
//! NetBox client. The endpoint must be an absolute URI; only its scheme and
//! host are used, the REST base path is always `/api`. One probe call is made
//! before the client is handed out.

use crate::error::ProviderError;
use crate::state::ResourceData;
use netbox_client::{NetBoxClient, NetBoxClientTrait};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Environment variable holding the API token
pub const APP_ID_ENV: &str = "NETBOX_APP_ID";
/// Environment variable holding the endpoint URL
pub const ENDPOINT_ENV: &str = "NETBOX_ENDPOINT_ADDR";

/// Provider configuration block
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API token, sent as `Authorization: Token <app_id>`
    #[serde(default)]
    pub app_id: String,
    /// NetBox endpoint, e.g. `https://netbox.example.com/api`
    #[serde(default)]
    pub endpoint: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("app_id", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Configuration from an explicit token and endpoint
    pub fn new(app_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Read the configuration from `NETBOX_APP_ID` / `NETBOX_ENDPOINT_ADDR`
    pub fn from_env() -> Self {
        Self {
            app_id: env::var(APP_ID_ENV).unwrap_or_default(),
            endpoint: env::var(ENDPOINT_ENV).unwrap_or_default(),
        }
    }

    /// Build from a provider block that has already had defaults applied
    pub fn from_data(data: &ResourceData) -> Self {
        Self {
            app_id: data.get_string("app_id"),
            endpoint: data.get_string("endpoint"),
        }
    }

    /// `scheme://host[:port]` derived from the endpoint
    ///
    /// The scheme defaults to `http` when the endpoint carries none
    /// (`netbox.local:8000`).
    pub fn base_url(&self) -> Result<String, ProviderError> {
        let invalid = |source| ProviderError::Configuration {
            endpoint: self.endpoint.clone(),
            source,
        };

        let parsed = Url::parse(&self.endpoint).map_err(invalid)?;
        let parsed = if parsed.host_str().is_some() {
            parsed
        } else {
            debug!("Endpoint {} has no host, assuming http", self.endpoint);
            Url::parse(&format!("http://{}", self.endpoint)).map_err(invalid)?
        };

        let host = parsed
            .host_str()
            .ok_or_else(|| invalid(url::ParseError::EmptyHost))?;
        let scheme = parsed.scheme().to_lowercase();
        Ok(match parsed.port() {
            Some(port) => format!("{}://{}:{}", scheme, host, port),
            None => format!("{}://{}", scheme, host),
        })
    }

    /// Build the client and validate connectivity with one probe call
    pub async fn client(&self) -> Result<Arc<dyn NetBoxClientTrait>, ProviderError> {
        let base_url = self.base_url()?;
        info!("Initializing NetBox client for {}", base_url);

        let client =
            NetBoxClient::new(base_url, self.app_id.clone()).map_err(ProviderError::ClientBuild)?;
        client
            .validate_connection()
            .await
            .map_err(ProviderError::ConnectionValidation)?;

        info!("NetBox connection validated");
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_app_id() {
        let rendered = format!("{:?}", Config::new("0123456789abcdef", "https://netbox.example.com"));
        assert!(rendered.contains("https://netbox.example.com"));
        assert!(!rendered.contains("0123456789abcdef"));
    }

    #[test]
    fn test_base_url_drops_path() {
        let config = Config::new("token", "https://netbox.example.com/api");
        assert_eq!(config.base_url().unwrap(), "https://netbox.example.com");
    }

    #[test]
    fn test_base_url_keeps_port() {
        let config = Config::new("token", "HTTP://Netbox.local:8080/");
        assert_eq!(config.base_url().unwrap(), "http://netbox.local:8080");
    }

    #[test]
    fn test_base_url_defaults_to_http() {
        let config = Config::new("token", "netbox.local:8000");
        assert_eq!(config.base_url().unwrap(), "http://netbox.local:8000");
    }

    #[test]
    fn test_invalid_endpoint_is_configuration_error() {
        for endpoint in ["not-a-url", ""] {
            let err = Config::new("token", endpoint).base_url().unwrap_err();
            assert!(
                matches!(err, ProviderError::Configuration { .. }),
                "{:?} should be rejected",
                endpoint
            );
        }
    }

    #[test]
    fn test_from_data() {
        let data = ResourceData::new()
            .with("app_id", "secret")
            .with("endpoint", "http://netbox");
        assert_eq!(Config::from_data(&data), Config::new("secret", "http://netbox"));
    }
}
