use serde_json::{Map, Value};

/// Agent data as submitted by a caller, before the store assigns an ID
///
/// An empty `id` is treated the same as a missing one.
///
/// # Example
/// ```
/// use agent_flows_api::domain::agent::NewAgent;
///
/// let draft = NewAgent::new("Researcher", "Finds sources");
/// assert!(draft.requested_id().is_none());
///
/// let draft = draft.with_id("agent_custom");
/// assert_eq!(draft.requested_id(), Some("agent_custom"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAgent {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub config: Map<String, Value>,
}

impl NewAgent {
    /// Creates a draft with no capabilities and an empty config
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            capabilities: Vec::new(),
            config: Map::new(),
        }
    }

    /// Sets an explicit ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the caller-supplied ID, or `None` if the store should assign one
    pub fn requested_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Finalizes the draft under the given ID
    pub fn into_agent(self, id: String) -> Agent {
        Agent {
            id,
            name: self.name,
            description: self.description,
            capabilities: self.capabilities,
            config: self.config,
        }
    }
}

/// A stored agent
///
/// Agents are pure data: a named capability unit that workflows refer to by
/// ID. Once stored, an agent is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    id: String,
    name: String,
    description: String,
    capabilities: Vec<String>,
    config: Map<String, Value>,
}

impl Agent {
    // ===== Getters =====

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }
}
