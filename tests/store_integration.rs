//! Integration tests for the entity store
//!
//! These tests use the store only through the EntityStore contract, covering
//! ID assignment, uniqueness, referential integrity and concurrent creates.

use std::collections::HashSet;
use std::sync::Arc;

use agent_flows_api::domain::agent::NewAgent;
use agent_flows_api::domain::errors::{EntityKind, StoreError};
use agent_flows_api::domain::repositories::EntityStore;
use agent_flows_api::domain::workflow::{Connection, ExecutionStatus, NewWorkflow};
use agent_flows_api::infrastructure::repositories::MemoryEntityStore;
use serde_json::json;

/// Fresh store per test
fn setup_store() -> Arc<dyn EntityStore> {
    Arc::new(MemoryEntityStore::new())
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let store = setup_store();
    store.create_agent(NewAgent::new("A1", "d")).await.unwrap();

    for id in ["agent_2", "", "AGENT_1", "agent_1 "] {
        assert_eq!(
            store.get_agent(id).await,
            Err(StoreError::not_found(EntityKind::Agent, id))
        );
    }
    assert!(store.get_workflow("workflow_1").await.is_err());
}

#[tokio::test]
async fn test_generated_ids_are_unique_with_mixed_explicit_ids() {
    let store = setup_store();
    store
        .create_agent(NewAgent::new("x", "d").with_id("agent_1"))
        .await
        .unwrap();
    store
        .create_agent(NewAgent::new("y", "d").with_id("agent_3"))
        .await
        .unwrap();

    let mut seen = HashSet::new();
    for i in 0..5 {
        let agent = store
            .create_agent(NewAgent::new(format!("gen{}", i), "d"))
            .await
            .unwrap();
        assert!(seen.insert(agent.id().to_string()));
    }

    let all = store.list_agents().await.unwrap();
    let unique: HashSet<&str> = all.iter().map(|a| a.id()).collect();
    assert_eq!(all.len(), 7);
    assert_eq!(unique.len(), 7);
}

#[tokio::test]
async fn test_explicit_id_conflict_leaves_store_unchanged() {
    let store = setup_store();
    let original = store.create_agent(NewAgent::new("A1", "d")).await.unwrap();

    let result = store
        .create_agent(NewAgent::new("Imposter", "x").with_id("agent_1"))
        .await;

    assert_eq!(result, Err(StoreError::conflict(EntityKind::Agent, "agent_1")));
    assert_eq!(store.get_agent("agent_1").await.unwrap(), original);
    assert_eq!(store.list_agents().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_reference_not_inserted() {
    let store = setup_store();

    let result = store
        .create_workflow(NewWorkflow::new(
            "W1",
            "d",
            vec!["ghost".to_string()],
        ))
        .await;

    assert_eq!(
        result,
        Err(StoreError::InvalidReference {
            agent_id: "ghost".to_string()
        })
    );
    assert!(store.get_workflow("workflow_1").await.is_err());
    assert!(store.list_workflows().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_valid_workflow_listed_exactly_once() {
    let store = setup_store();
    store.create_agent(NewAgent::new("A1", "d")).await.unwrap();
    store.create_agent(NewAgent::new("A2", "d")).await.unwrap();

    let workflow = store
        .create_workflow(NewWorkflow::new(
            "W1",
            "d",
            vec!["agent_2".to_string(), "agent_1".to_string()],
        ))
        .await
        .unwrap();

    let listed = store.list_workflows().await.unwrap();
    assert_eq!(listed.iter().filter(|w| w.id() == workflow.id()).count(), 1);
    assert_eq!(listed[0].agents(), ["agent_2", "agent_1"]);
}

#[tokio::test]
async fn test_execute_ignores_workflow_contents() {
    let store = setup_store();
    store.create_agent(NewAgent::new("A1", "d")).await.unwrap();

    let mut busy = NewWorkflow::new("Busy", "d", vec!["agent_1".to_string(); 3]);
    let mut edge = Connection::new();
    edge.insert("from".to_string(), json!("agent_1"));
    edge.insert("condition".to_string(), json!({"on": "failure"}));
    busy.connections.push(edge);
    let busy = store.create_workflow(busy).await.unwrap();
    let empty = store
        .create_workflow(NewWorkflow::new("Empty", "d", vec![]))
        .await
        .unwrap();

    for id in [busy.id(), empty.id()] {
        let result = store.execute_workflow(id).await.unwrap();
        assert_eq!(result.workflow_id, id);
        assert_eq!(result.status, ExecutionStatus::Completed);
        assert_eq!(
            result.logs,
            vec!["Started workflow execution", "Workflow completed"]
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_assign_distinct_ids() {
    let store = setup_store();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .create_agent(NewAgent::new(format!("agent {}", i), "d"))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let agent = handle.await.unwrap().unwrap();
        ids.insert(agent.id().to_string());
    }

    assert_eq!(ids.len(), 50);
    for n in 1..=50 {
        assert!(ids.contains(&format!("agent_{}", n)));
    }
}
