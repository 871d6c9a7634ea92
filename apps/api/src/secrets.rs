//! Database password resolution.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Password Resolution (startup only)                   │
//! │                                                                         │
//! │  DB_PASSWORD_SSM_PARAM set?                                            │
//! │       │                                                                 │
//! │       ├── yes ──► SSM GetParameter(WithDecryption) ──► ok ──► password │
//! │       │                                         └──► error ──► ABORT   │
//! │       ▼                                                                 │
//! │  DB_PASSWORD set? ── yes ──► password                                  │
//! │       │                                                                 │
//! │       └── no ──► ABORT (no default password)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use tracing::{info, warn};

use crate::config::PasswordSource;

/// A store that can hand out secret values by name.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<String, SecretError>;
}

/// AWS SSM Parameter Store backed secrets.
pub struct SsmSecretStore {
    client: aws_sdk_ssm::Client,
}

impl SsmSecretStore {
    /// Builds a client from the standard AWS environment/profile chain.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let cfg = loader.load().await;
        let client = aws_sdk_ssm::Client::new(&cfg);
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String, SecretError> {
        let out = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| SecretError::Fetch {
                name: name.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        out.parameter()
            .and_then(|p| p.value())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| SecretError::Empty {
                name: name.to_string(),
            })
    }
}

/// Resolves the database password from its configured source.
///
/// `store` is only consulted for [`PasswordSource::Ssm`]; callers may pass
/// `None` when no SSM parameter is configured.
pub async fn resolve_password(
    source: &PasswordSource,
    store: Option<&dyn SecretStore>,
) -> Result<String, SecretError> {
    match source {
        PasswordSource::Ssm { parameter } => {
            let store = store.ok_or(SecretError::StoreUnavailable)?;
            info!(parameter = %parameter, "Fetching database password from SSM");
            store.get_secret(parameter).await.inspect_err(|e| {
                warn!(error = %e, "Database password lookup failed");
            })
        }
        PasswordSource::Plain(password) => Ok(password.clone()),
        PasswordSource::Missing => Err(SecretError::NotConfigured),
    }
}

/// Secret lookup errors. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("Failed to fetch secret {name}: {reason}")]
    Fetch { name: String, reason: String },

    #[error("Secret {name} has no value")]
    Empty { name: String },

    #[error("No secret store available")]
    StoreUnavailable,

    #[error("No database password configured (set DB_PASSWORD or DB_PASSWORD_SSM_PARAM)")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticStore(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl SecretStore for StaticStore {
        async fn get_secret(&self, name: &str) -> Result<String, SecretError> {
            self.0
                .get(name)
                .map(|v| v.to_string())
                .ok_or_else(|| SecretError::Fetch {
                    name: name.to_string(),
                    reason: "ParameterNotFound".to_string(),
                })
        }
    }

    fn store() -> StaticStore {
        StaticStore(HashMap::from([("/portfolio/db/password", "from-ssm")]))
    }

    #[tokio::test]
    async fn test_ssm_source_uses_store() {
        let source = PasswordSource::Ssm {
            parameter: "/portfolio/db/password".to_string(),
        };
        let password = resolve_password(&source, Some(&store())).await.unwrap();
        assert_eq!(password, "from-ssm");
    }

    #[tokio::test]
    async fn test_ssm_failure_is_an_error_not_a_default() {
        let source = PasswordSource::Ssm {
            parameter: "/missing".to_string(),
        };
        let err = resolve_password(&source, Some(&store())).await.unwrap_err();
        assert!(matches!(err, SecretError::Fetch { .. }));

        let err = resolve_password(&source, None).await.unwrap_err();
        assert!(matches!(err, SecretError::StoreUnavailable));
    }

    #[tokio::test]
    async fn test_plain_source_skips_store() {
        let source = PasswordSource::Plain("local".to_string());
        assert_eq!(resolve_password(&source, None).await.unwrap(), "local");
    }

    #[tokio::test]
    async fn test_missing_password_fails() {
        let err = resolve_password(&PasswordSource::Missing, None)
            .await
            .unwrap_err();
        assert!(matches!(err, SecretError::NotConfigured));
    }
}
