use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ContainerSpec, FamilyPage};

/// The slice of the ECS task-definition API this tool needs.
#[async_trait]
pub trait TaskDefinitionApi: Send + Sync {
    /// Fetch one page of active task-definition family names.
    async fn families_page(&self, next_token: Option<String>) -> Result<FamilyPage>;

    /// The newest active task definition for a family prefix, if any.
    async fn latest_task_definition(&self, family: &str) -> Result<Option<String>>;

    /// The container definitions of a task definition.
    async fn describe(&self, task_definition: &str) -> Result<Vec<ContainerSpec>>;
}

/// List every active task-definition family name, following continuation
/// tokens until the service stops returning them. Service order is kept.
pub async fn list_families<A: TaskDefinitionApi>(api: &A) -> Result<Vec<String>> {
    let mut families = Vec::new();
    let mut token = None;
    loop {
        let page = api.families_page(token).await?;
        families.extend(page.families);
        match page.next_token {
            Some(next) => token = Some(next),
            None => break,
        }
    }
    debug!("listed {} task definition families", families.len());
    if families.is_empty() {
        return Err(Error::NoFamilies);
    }
    Ok(families)
}

/// Resolve a family name to its newest active task definition identifier.
pub async fn latest_task_definition<A: TaskDefinitionApi>(
    api: &A,
    family: &str,
) -> Result<String> {
    api.latest_task_definition(family)
        .await?
        .ok_or_else(|| Error::NoTaskDefinition(family.to_string()))
}
