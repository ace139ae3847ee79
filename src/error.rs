use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no active task definition families found")]
    NoFamilies,

    #[error("no task definition found for family: {0}")]
    NoTaskDefinition(String),

    #[error("no container definitions in task definition: {0}")]
    NoContainers(String),

    #[error("no container names match the given keywords")]
    EmptySelection,

    #[error("secret {0} has no valueFrom reference")]
    MissingValueFrom(String),

    #[error("aws api error: {0}")]
    Api(String),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
