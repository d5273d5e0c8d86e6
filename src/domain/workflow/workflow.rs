use serde_json::{Map, Value};

/// An edge between agents in a workflow; the contents are never interpreted
pub type Connection = Map<String, Value>;

/// Workflow data as submitted by a caller, before the store assigns an ID
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewWorkflow {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub agents: Vec<String>,
    pub connections: Vec<Connection>,
}

impl NewWorkflow {
    /// Creates a draft referencing the given agent IDs, with no connections
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        agents: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            agents,
            connections: Vec::new(),
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

    /// Returns the first referenced agent ID for which `exists` is false
    ///
    /// References are checked in list order and checking stops at the first
    /// miss.
    ///
    /// # Example
    /// ```
    /// use agent_flows_api::domain::workflow::NewWorkflow;
    ///
    /// let draft = NewWorkflow::new(
    ///     "W1",
    ///     "d",
    ///     vec!["agent_1".to_string(), "ghost".to_string(), "other".to_string()],
    /// );
    /// assert_eq!(draft.first_missing_agent(|id| id == "agent_1"), Some("ghost"));
    /// ```
    pub fn first_missing_agent<F>(&self, exists: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.agents
            .iter()
            .map(String::as_str)
            .find(|agent_id| !exists(agent_id))
    }

    /// Finalizes the draft under the given ID
    pub fn into_workflow(self, id: String) -> Workflow {
        Workflow {
            id,
            name: self.name,
            description: self.description,
            agents: self.agents,
            connections: self.connections,
        }
    }
}

/// A stored workflow
///
/// Records an intended composition of agents. Every ID in `agents` referred
/// to an existing agent when the workflow was created.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    id: String,
    name: String,
    description: String,
    agents: Vec<String>,
    connections: Vec<Connection>,
}

impl Workflow {
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

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}
