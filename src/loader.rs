use crate::directory::TaskDefinitionApi;
use crate::error::{Error, Result};
use crate::types::{ContainerDefinition, ContainerSpec};

/// Load the environment of one container from a task definition.
///
/// A single container is selected automatically; with several, `select` is
/// called with their display names and must return an index into the list.
/// Environment entries and secret references come back sorted ascending by
/// name so the rendered output is deterministic.
pub async fn load<A, F>(
    api: &A,
    task_definition: &str,
    mut select: F,
) -> Result<ContainerDefinition>
where
    A: TaskDefinitionApi,
    F: FnMut(&[String]) -> Result<usize>,
{
    let containers = api.describe(task_definition).await?;
    if containers.is_empty() {
        return Err(Error::NoContainers(task_definition.to_string()));
    }

    let index = if containers.len() == 1 {
        0
    } else {
        let choices: Vec<String> = containers
            .iter()
            .enumerate()
            .map(|(i, c)| match &c.name {
                Some(name) => name.clone(),
                None => format!("Container {i}"),
            })
            .collect();
        select(&choices)?
    };

    let ContainerSpec {
        mut environment,
        mut secrets,
        ..
    } = containers.into_iter().nth(index).unwrap_or_default();

    environment.sort_by(|a, b| a.name.cmp(&b.name));
    secrets.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(ContainerDefinition {
        environment,
        secrets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EnvironmentEntry, FamilyPage, SecretReference};
    use async_trait::async_trait;

    struct DescribeApi(Vec<ContainerSpec>);

    #[async_trait]
    impl TaskDefinitionApi for DescribeApi {
        async fn families_page(&self, _next_token: Option<String>) -> Result<FamilyPage> {
            Ok(FamilyPage::default())
        }

        async fn latest_task_definition(&self, _family: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn describe(&self, _task_definition: &str) -> Result<Vec<ContainerSpec>> {
            Ok(self.0.clone())
        }
    }

    fn env(name: &str, value: &str) -> EnvironmentEntry {
        EnvironmentEntry {
            name: name.into(),
            value: value.into(),
        }
    }

    fn secret(name: &str, value_from: &str) -> SecretReference {
        SecretReference {
            name: name.into(),
            value_from: value_from.into(),
        }
    }

    #[tokio::test]
    async fn test_single_container_selected_without_prompt() {
        let api = DescribeApi(vec![ContainerSpec {
            name: Some("app".into()),
            environment: vec![env("PORT", "8080")],
            secrets: Vec::new(),
        }]);
        let def = load(&api, "app:1", |_| panic!("prompted for one container"))
            .await
            .unwrap();
        assert_eq!(def.environment, vec![env("PORT", "8080")]);
    }

    #[tokio::test]
    async fn test_multiple_containers_use_selection() {
        let api = DescribeApi(vec![
            ContainerSpec {
                name: Some("app".into()),
                environment: vec![env("PORT", "8080")],
                secrets: Vec::new(),
            },
            ContainerSpec {
                name: None,
                environment: vec![env("STATSD_HOST", "127.0.0.1")],
                secrets: Vec::new(),
            },
        ]);
        let def = load(&api, "app:1", |choices| {
            assert_eq!(choices, ["app", "Container 1"]);
            Ok(1)
        })
        .await
        .unwrap();
        assert_eq!(def.environment, vec![env("STATSD_HOST", "127.0.0.1")]);
    }

    #[tokio::test]
    async fn test_lists_are_sorted_ascending_by_name() {
        let api = DescribeApi(vec![ContainerSpec {
            name: Some("app".into()),
            environment: vec![env("B", "2"), env("A", "1")],
            secrets: vec![secret("Z_KEY", "/z"), secret("DB_PASS", "/db")],
        }]);
        let def = load(&api, "app:1", |_| unreachable!()).await.unwrap();
        assert_eq!(def.environment, vec![env("A", "1"), env("B", "2")]);
        assert_eq!(
            def.secrets,
            vec![secret("DB_PASS", "/db"), secret("Z_KEY", "/z")]
        );
    }

    #[tokio::test]
    async fn test_no_containers_is_not_found() {
        let api = DescribeApi(Vec::new());
        assert!(matches!(
            load(&api, "app:1", |_| Ok(0)).await,
            Err(Error::NoContainers(id)) if id == "app:1"
        ));
    }
}
