/// A plain, non-secret environment variable from a container definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentEntry {
    pub name: String,
    pub value: String,
}

/// A named pointer to a value held in SSM Parameter Store, resolved at
/// runtime. An empty `value_from` indicates a malformed upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference {
    pub name: String,
    pub value_from: String,
}

/// The outcome of resolving a [`SecretReference`]; `value` holds the
/// `ERROR_FETCHING` sentinel when resolution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSecret {
    pub name: String,
    pub value: String,
}

/// The selected container's environment, split into plain entries and
/// secret references, each sorted ascending by name.
#[derive(Debug, Clone, Default)]
pub struct ContainerDefinition {
    pub environment: Vec<EnvironmentEntry>,
    pub secrets: Vec<SecretReference>,
}

/// One container's raw payload from a task-definition description,
/// before any selection or sorting has happened.
#[derive(Debug, Clone, Default)]
pub struct ContainerSpec {
    pub name: Option<String>,
    pub environment: Vec<EnvironmentEntry>,
    pub secrets: Vec<SecretReference>,
}

/// One page of the paginated task-definition family listing.
#[derive(Debug, Clone, Default)]
pub struct FamilyPage {
    pub families: Vec<String>,
    pub next_token: Option<String>,
}
