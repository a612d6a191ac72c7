//! Connection settings for the storage service
//!
//! Settings are loaded once from the environment and injected into the
//! [`HandleManager`](crate::handle::HandleManager). Nothing in this crate
//! holds them in process-wide mutable state; tests that need to redirect to
//! a local endpoint construct their own `StorageSettings` instead.

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_dynamodb::config::Credentials;

/// Per-operation timeout applied to every storage-service call.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials, region, and optional endpoint override for DynamoDB.
///
/// The defaults are only meaningful against a local emulator such as
/// LocalStack; real deployments set the corresponding environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageSettings {
    /// AWS access key id
    pub access_key_id: String,
    /// AWS secret access key
    pub secret_access_key: String,
    /// AWS region identifier
    pub region: String,
    /// When set, all DynamoDB calls are redirected to this URL instead of
    /// the real managed endpoint
    pub endpoint_url: Option<String>,
}

impl StorageSettings {
    /// Loads settings from the environment, falling back to local-test
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or_else(|_| "test".to_string()),
            secret_access_key: env::var("AWS_SECRET_ACCESS_KEY")
                .unwrap_or_else(|_| "test".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint_url: env::var("DYNAMODB_ENDPOINT_URL").ok(),
        }
    }

    /// Settings pointed at a local emulator endpoint.
    #[must_use]
    pub fn for_endpoint(endpoint_url: impl Into<String>) -> Self {
        Self {
            access_key_id: "test".to_string(),
            secret_access_key: "test".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: Some(endpoint_url.into()),
        }
    }

    /// AWS SDK configuration built from these settings.
    ///
    /// Retries are disabled: a failed storage call propagates to the caller
    /// immediately. Every operation carries a bounded timeout so no request
    /// can hang on an unresponsive endpoint.
    pub async fn sdk_config(&self) -> aws_config::SdkConfig {
        let credentials = Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            None,
            None,
            "item-storage-settings",
        );

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(OPERATION_TIMEOUT)
            .build();

        let mut config_builder = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = &self.endpoint_url {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        env::remove_var("AWS_ACCESS_KEY_ID");
        env::remove_var("AWS_SECRET_ACCESS_KEY");
        env::remove_var("AWS_REGION");
        env::remove_var("DYNAMODB_ENDPOINT_URL");

        let settings = StorageSettings::from_env();
        assert_eq!(settings.access_key_id, "test");
        assert_eq!(settings.secret_access_key, "test");
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.endpoint_url, None);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        env::set_var("AWS_ACCESS_KEY_ID", "AKIAEXAMPLE");
        env::set_var("AWS_SECRET_ACCESS_KEY", "secret");
        env::set_var("AWS_REGION", "eu-west-1");
        env::set_var("DYNAMODB_ENDPOINT_URL", "http://localhost:4566");

        let settings = StorageSettings::from_env();
        assert_eq!(settings.access_key_id, "AKIAEXAMPLE");
        assert_eq!(settings.secret_access_key, "secret");
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );

        env::remove_var("AWS_ACCESS_KEY_ID");
        env::remove_var("AWS_SECRET_ACCESS_KEY");
        env::remove_var("AWS_REGION");
        env::remove_var("DYNAMODB_ENDPOINT_URL");
    }

    #[test]
    fn test_for_endpoint() {
        let settings = StorageSettings::for_endpoint("http://localhost:4566");
        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(settings.region, "us-east-1");
    }
}
