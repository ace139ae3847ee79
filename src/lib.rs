//! Rebuild the `.env` file of a containerized service from its ECS task
//! definition.
//!
//! The flow is interactive: pick an AWS profile, search the active
//! task-definition families by keyword, select one, and the tool loads the
//! chosen container's environment, resolves its secret references against
//! SSM Parameter Store with a bounded fan-out, and prints a combined
//! `.env`-formatted block.
//!
//! External services sit behind trait seams ([`directory::TaskDefinitionApi`],
//! [`resolver::SecretStore`], [`prompt::Prompter`]) so the whole pipeline is
//! testable without AWS or a terminal.

pub mod aws;
pub mod directory;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod prompt;
pub mod render;
pub mod resolver;
pub mod session;
pub mod types;

pub use error::{Error, Result};
