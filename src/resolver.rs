use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;

/// Substituted for a secret's value when resolution fails, so the operator
/// can spot and fix the entry instead of losing the whole run.
pub const ERROR_SENTINEL: &str = "ERROR_FETCHING";

/// Backing store for decrypted parameter values.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the decrypted value for a parameter name.
    async fn get(&self, name: &str) -> Result<String>;
}

/// Resolves secret references against a [`SecretStore`], swallowing
/// per-secret failures into [`ERROR_SENTINEL`].
pub struct ParameterResolver<S> {
    store: S,
}

impl<S: SecretStore> ParameterResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolve a secret reference to its decrypted value.
    ///
    /// A missing value or transport failure yields the sentinel rather than
    /// an error; the caller decides whether that matters.
    pub async fn resolve(&self, reference: &str) -> String {
        let name = strip_parameter_arn(reference);
        match self.store.get(name).await {
            Ok(value) => value,
            Err(err) => {
                warn!("failed to resolve {}: {}", reference, err);
                ERROR_SENTINEL.to_string()
            }
        }
    }
}

/// Reduce an SSM parameter ARN to the parameter path GetParameter expects.
///
/// `arn:aws:ssm:us-east-1:123456789012:parameter/app/db-pass` becomes
/// `/app/db-pass`; anything that is not a parameter ARN passes through
/// unchanged.
pub fn strip_parameter_arn(reference: &str) -> &str {
    if !reference.starts_with("arn:") {
        return reference;
    }
    match reference.find(":parameter/") {
        Some(idx) => &reference[idx + ":parameter".len()..],
        None => reference,
    }
}
