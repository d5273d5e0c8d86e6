use async_trait::async_trait;
use tracing::info;

use crate::domain::agent::{Agent, NewAgent};
use crate::domain::errors::StoreResult;
use crate::domain::workflow::{ExecutionResult, NewWorkflow, Workflow};

/// Store for the agent and workflow collections
///
/// Both collections live behind one contract because workflow creation
/// validates against the agent collection. Implementations must make each
/// create atomic: ID assignment, the uniqueness check, reference validation
/// and the insert happen as one step.
///
/// # Invariants
/// - Agent IDs are unique within the agent collection
/// - Workflow IDs are unique within the workflow collection
/// - Every agent ID a workflow lists existed when the workflow was created
/// - A failed operation leaves the store unchanged
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Store a new agent, assigning an ID if none was given
    ///
    /// Fails with `Conflict` if the ID is already taken.
    async fn create_agent(&self, agent: NewAgent) -> StoreResult<Agent>;

    /// Find an agent by ID, failing with `NotFound` if absent
    async fn get_agent(&self, id: &str) -> StoreResult<Agent>;

    /// Snapshot of all agents in insertion order
    async fn list_agents(&self) -> StoreResult<Vec<Agent>>;

    /// Store a new workflow, assigning an ID if none was given
    ///
    /// Fails with `Conflict` if the ID is already taken, then with
    /// `InvalidReference` naming the first listed agent that does not exist.
    async fn create_workflow(&self, workflow: NewWorkflow) -> StoreResult<Workflow>;

    /// Find a workflow by ID, failing with `NotFound` if absent
    async fn get_workflow(&self, id: &str) -> StoreResult<Workflow>;

    /// Snapshot of all workflows in insertion order
    async fn list_workflows(&self) -> StoreResult<Vec<Workflow>>;

    /// Execute a stored workflow
    ///
    /// There is no execution engine: every existing workflow yields
    /// `ExecutionResult::completed`.
    async fn execute_workflow(&self, id: &str) -> StoreResult<ExecutionResult> {
        let workflow = self.get_workflow(id).await?;
        info!("Executing workflow: {}", workflow.id());

        Ok(ExecutionResult::completed(workflow.id()))
    }
}
