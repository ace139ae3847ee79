//! AWS SDK adapters behind the crate's trait seams.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_ecs::types::{SortOrder, TaskDefinitionFamilyStatus, TaskDefinitionStatus};

use crate::directory::TaskDefinitionApi;
use crate::error::{Error, Result};
use crate::resolver::SecretStore;
use crate::types::{ContainerSpec, EnvironmentEntry, FamilyPage, SecretReference};

/// Load AWS configuration with the profile and region threaded in
/// explicitly. An absent profile falls through to the default credential
/// chain.
pub async fn load_config(profile: Option<&str>, region: &str) -> SdkConfig {
    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }
    loader.load().await
}

/// ECS-backed task-definition directory.
pub struct EcsDirectory {
    client: aws_sdk_ecs::Client,
}

impl EcsDirectory {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ecs::Client::new(config),
        }
    }
}

#[async_trait]
impl TaskDefinitionApi for EcsDirectory {
    async fn families_page(&self, next_token: Option<String>) -> Result<FamilyPage> {
        let output = self
            .client
            .list_task_definition_families()
            .status(TaskDefinitionFamilyStatus::Active)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| Error::Api(aws_sdk_ecs::error::DisplayErrorContext(e).to_string()))?;

        Ok(FamilyPage {
            families: output.families().to_vec(),
            next_token: output.next_token().map(String::from),
        })
    }

    async fn latest_task_definition(&self, family: &str) -> Result<Option<String>> {
        let output = self
            .client
            .list_task_definitions()
            .family_prefix(family)
            .status(TaskDefinitionStatus::Active)
            .sort(SortOrder::Desc)
            .max_results(1)
            .send()
            .await
            .map_err(|e| Error::Api(aws_sdk_ecs::error::DisplayErrorContext(e).to_string()))?;

        // ARNs look like arn:aws:ecs:…:task-definition/family:revision;
        // the family:revision segment is enough for a later describe call.
        Ok(output.task_definition_arns().first().map(|arn| {
            arn.rsplit_once('/')
                .map(|(_, id)| id.to_string())
                .unwrap_or_else(|| arn.clone())
        }))
    }

    async fn describe(&self, task_definition: &str) -> Result<Vec<ContainerSpec>> {
        let output = self
            .client
            .describe_task_definition()
            .task_definition(task_definition)
            .send()
            .await
            .map_err(|e| Error::Api(aws_sdk_ecs::error::DisplayErrorContext(e).to_string()))?;

        let containers = output
            .task_definition()
            .map(|td| td.container_definitions())
            .unwrap_or_default();

        Ok(containers
            .iter()
            .map(|container| ContainerSpec {
                name: container.name().map(String::from),
                environment: container
                    .environment()
                    .iter()
                    .map(|kv| EnvironmentEntry {
                        name: kv.name().unwrap_or_default().to_string(),
                        value: kv.value().unwrap_or_default().to_string(),
                    })
                    .collect(),
                secrets: container
                    .secrets()
                    .iter()
                    .map(|secret| SecretReference {
                        name: secret.name().to_string(),
                        value_from: secret.value_from().to_string(),
                    })
                    .collect(),
            })
            .collect())
    }
}

/// SSM Parameter Store backing for secret resolution.
pub struct SsmStore {
    client: aws_sdk_ssm::Client,
}

impl SsmStore {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ssm::Client::new(config),
        }
    }
}

#[async_trait]
impl SecretStore for SsmStore {
    async fn get(&self, name: &str) -> Result<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| Error::Api(aws_sdk_ssm::error::DisplayErrorContext(e).to_string()))?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(String::from)
            .ok_or_else(|| Error::Api(format!("no value found for {name}")))
    }
}
