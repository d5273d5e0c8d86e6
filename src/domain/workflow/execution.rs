use serde::Serialize;
use serde_json::{json, Map, Value};

/// Outcome of a workflow execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Completed,
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Result of executing a workflow
///
/// Derived on every call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub workflow_id: String,
    pub status: ExecutionStatus,
    pub result: Map<String, Value>,
    pub logs: Vec<String>,
}

impl ExecutionResult {
    /// The canned result returned for every execution
    ///
    /// No agent is invoked. The referenced agents and connections have no
    /// influence on the outcome.
    ///
    /// # Example
    /// ```
    /// use agent_flows_api::domain::workflow::{ExecutionResult, ExecutionStatus};
    ///
    /// let result = ExecutionResult::completed("workflow_1");
    /// assert_eq!(result.status, ExecutionStatus::Completed);
    /// assert_eq!(result.logs.len(), 2);
    /// ```
    pub fn completed(workflow_id: impl Into<String>) -> Self {
        let mut result = Map::new();
        result.insert(
            "message".to_string(),
            json!("Workflow executed successfully"),
        );

        Self {
            workflow_id: workflow_id.into(),
            status: ExecutionStatus::Completed,
            result,
            logs: vec![
                "Started workflow execution".to_string(),
                "Workflow completed".to_string(),
            ],
        }
    }
}
