use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::agent::{Agent, NewAgent};
use crate::domain::errors::{EntityKind, StoreError, StoreResult};
use crate::domain::repositories::EntityStore;
use crate::domain::workflow::{NewWorkflow, Workflow};

/// One entity collection in insertion order, with an ID index and the
/// sequence used for generated IDs
#[derive(Debug)]
struct Collection<T> {
    kind: EntityKind,
    entries: Vec<T>,
    positions: HashMap<String, usize>,
    sequence: u64,
}

impl<T: Clone> Collection<T> {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            positions: HashMap::new(),
            sequence: 0,
        }
    }

    fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    fn get(&self, id: &str) -> StoreResult<T> {
        self.positions
            .get(id)
            .map(|&position| self.entries[position].clone())
            .ok_or_else(|| StoreError::not_found(self.kind, id))
    }

    fn snapshot(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Resolves the ID for a create, returning it with the sequence value to
    /// commit if the create succeeds
    ///
    /// A generated ID skips numbers whose ID is already taken, so it never
    /// conflicts. A requested ID is returned as is and may conflict.
    fn resolve_id(&self, requested: Option<&str>) -> (String, u64) {
        if let Some(id) = requested {
            return (id.to_string(), self.sequence + 1);
        }

        let mut next = self.sequence + 1;
        loop {
            let id = format!("{}_{}", self.kind.id_prefix(), next);
            if !self.contains(&id) {
                return (id, next);
            }
            next += 1;
        }
    }

    fn insert(&mut self, id: String, entity: T, sequence: u64) {
        self.positions.insert(id, self.entries.len());
        self.entries.push(entity);
        self.sequence = sequence;
    }
}

#[derive(Debug)]
struct Collections {
    agents: Collection<Agent>,
    workflows: Collection<Workflow>,
}

/// In-memory implementation of EntityStore
///
/// A single lock guards both collections. Creates hold the write lock from
/// ID assignment through insertion, so concurrent creates never hand out the
/// same ID and a workflow never validates against a half-applied agent insert.
/// Contents are lost when the process exits.
#[derive(Debug)]
pub struct MemoryEntityStore {
    collections: RwLock<Collections>,
}

impl MemoryEntityStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(Collections {
                agents: Collection::new(EntityKind::Agent),
                workflows: Collection::new(EntityKind::Workflow),
            }),
        }
    }
}

impl Default for MemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn create_agent(&self, agent: NewAgent) -> StoreResult<Agent> {
        let mut collections = self.collections.write().await;
        let agents = &mut collections.agents;

        let (id, sequence) = agents.resolve_id(agent.requested_id());
        if agents.contains(&id) {
            return Err(StoreError::conflict(EntityKind::Agent, id));
        }

        let agent = agent.into_agent(id.clone());
        agents.insert(id, agent.clone(), sequence);

        info!("Created agent: {}", agent.id());
        Ok(agent)
    }

    async fn get_agent(&self, id: &str) -> StoreResult<Agent> {
        self.collections.read().await.agents.get(id)
    }

    async fn list_agents(&self) -> StoreResult<Vec<Agent>> {
        Ok(self.collections.read().await.agents.snapshot())
    }

    async fn create_workflow(&self, workflow: NewWorkflow) -> StoreResult<Workflow> {
        let mut collections = self.collections.write().await;
        let Collections { agents, workflows } = &mut *collections;

        let (id, sequence) = workflows.resolve_id(workflow.requested_id());
        if workflows.contains(&id) {
            return Err(StoreError::conflict(EntityKind::Workflow, id));
        }

        if let Some(missing) = workflow.first_missing_agent(|agent_id| agents.contains(agent_id)) {
            return Err(StoreError::InvalidReference {
                agent_id: missing.to_string(),
            });
        }

        let workflow = workflow.into_workflow(id.clone());
        workflows.insert(id, workflow.clone(), sequence);

        info!("Created workflow: {}", workflow.id());
        Ok(workflow)
    }

    async fn get_workflow(&self, id: &str) -> StoreResult<Workflow> {
        self.collections.read().await.workflows.get(id)
    }

    async fn list_workflows(&self) -> StoreResult<Vec<Workflow>> {
        Ok(self.collections.read().await.workflows.snapshot())
    }
}
