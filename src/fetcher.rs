//! Bounded-concurrency secret resolution.
//!
//! Fans out over a list of secret references with at most `concurrency`
//! resolutions in flight, and yields the results in input order no matter
//! which resolutions finish first.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::future::try_join_all;
use tokio::sync::Semaphore;

use crate::error::{Error, Result};
use crate::resolver::{ParameterResolver, SecretStore};
use crate::types::{ResolvedSecret, SecretReference};

/// Resolution of a single secret reference. Infallible by contract: a
/// failed lookup surfaces as a sentinel value, not an error.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, reference: &str) -> String;
}

#[async_trait]
impl<S: SecretStore> Resolve for ParameterResolver<S> {
    async fn resolve(&self, reference: &str) -> String {
        ParameterResolver::resolve(self, reference).await
    }
}

/// Resolve every secret in `secrets`, keeping at most `concurrency`
/// lookups in flight at once.
///
/// Results come back in the same order as the input list. `on_progress` is
/// called with the running count of completed resolutions, in completion
/// order, and carries no correctness weight.
///
/// A secret with an empty `value_from` fails the whole batch with
/// [`Error::MissingValueFrom`]: it means the task-definition payload was
/// malformed, and rendering a half-built environment file would be worse
/// than rendering none.
pub async fn fetch_all<R, F>(
    resolver: &R,
    secrets: &[SecretReference],
    concurrency: usize,
    on_progress: F,
) -> Result<Vec<ResolvedSecret>>
where
    R: Resolve,
    F: Fn(usize) + Send + Sync,
{
    let gate = Semaphore::new(concurrency.max(1));
    let completed = AtomicUsize::new(0);

    try_join_all(secrets.iter().map(|secret| {
        let gate = &gate;
        let completed = &completed;
        let on_progress = &on_progress;
        async move {
            if secret.value_from.is_empty() {
                return Err(Error::MissingValueFrom(secret.name.clone()));
            }
            // The gate is never closed; acquire failures are not expected.
            let permit = gate
                .acquire()
                .await
                .unwrap_or_else(|_| unreachable!("concurrency gate closed"));
            let value = resolver.resolve(&secret.value_from).await;
            drop(permit);
            on_progress(completed.fetch_add(1, Ordering::SeqCst) + 1);
            Ok(ResolvedSecret {
                name: secret.name.clone(),
                value,
            })
        }
    }))
    .await
}
