use std::fmt;

use thiserror::Error;

/// The two entity collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Agent,
    Workflow,
}

impl EntityKind {
    /// Prefix used when the store generates an identifier
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EntityKind::Agent => "agent",
            EntityKind::Workflow => "workflow",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Agent => write!(f, "Agent"),
            EntityKind::Workflow => write!(f, "Workflow"),
        }
    }
}

/// Errors returned by entity store operations
///
/// Every variant is an expected outcome of a bad request. None of them
/// leave the store modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("{kind} with ID {id} already exists")]
    Conflict { kind: EntityKind, id: String },

    #[error("Agent with ID {agent_id} does not exist")]
    InvalidReference { agent_id: String },
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn conflict(kind: EntityKind, id: impl Into<String>) -> Self {
        StoreError::Conflict {
            kind,
            id: id.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = StoreError::not_found(EntityKind::Workflow, "workflow_404");
        assert_eq!(err.to_string(), "Workflow with ID workflow_404 not found");
    }

    #[test]
    fn conflict_message() {
        let err = StoreError::conflict(EntityKind::Agent, "agent_1");
        assert_eq!(err.to_string(), "Agent with ID agent_1 already exists");
    }

    #[test]
    fn invalid_reference_message() {
        let err = StoreError::InvalidReference {
            agent_id: "ghost".to_string(),
        };
        assert_eq!(err.to_string(), "Agent with ID ghost does not exist");
    }

    #[test]
    fn id_prefixes() {
        assert_eq!(EntityKind::Agent.id_prefix(), "agent");
        assert_eq!(EntityKind::Workflow.id_prefix(), "workflow");
    }
}
