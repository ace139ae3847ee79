//! One interactive run: prompts, filtering, loading and the final render.

use tracing::info;

use crate::error::{Error, Result};
use crate::fetcher::{self, Resolve};
use crate::prompt::Prompter;
use crate::render::render_env_block;
use crate::{directory, loader};
use crate::directory::TaskDefinitionApi;

/// Keep only the names containing every whitespace-separated keyword as a
/// case-insensitive substring.
pub fn filter_families(names: &[String], keywords: &str) -> Vec<String> {
    let tokens: Vec<String> = keywords
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    names
        .iter()
        .filter(|name| {
            let name = name.to_lowercase();
            tokens.iter().all(|token| name.contains(token))
        })
        .cloned()
        .collect()
}

/// Drive one session: keyword search over the active task-definition
/// families, container selection, bounded secret resolution, and the
/// rendered `.env` block.
///
/// `progress` is called with `(completed, total)` as secrets resolve.
/// The credential context is already baked into `api` and `resolver`.
pub async fn run<P, A, R, F>(
    prompter: &P,
    api: &A,
    resolver: &R,
    concurrency: usize,
    progress: F,
) -> Result<String>
where
    P: Prompter,
    A: TaskDefinitionApi,
    R: Resolve,
    F: Fn(usize, usize) + Send + Sync,
{
    let keywords = prompter.input(
        "Enter space separated keywords to search for container names",
        "",
    )?;

    let families = directory::list_families(api).await?;
    let filtered = filter_families(&families, &keywords);
    if filtered.is_empty() {
        return Err(Error::EmptySelection);
    }

    let choice = prompter.select("Select container name", &filtered)?;
    let family = &filtered[choice];

    let task_definition = directory::latest_task_definition(api, family).await?;
    info!("resolved family {} to {}", family, task_definition);

    let definition = loader::load(api, &task_definition, |choices| {
        prompter.select("Select container", choices)
    })
    .await?;

    let total = definition.secrets.len();
    let resolved = fetcher::fetch_all(resolver, &definition.secrets, concurrency, |done| {
        progress(done, total)
    })
    .await?;

    Ok(render_env_block(&definition.environment, &resolved))
}
