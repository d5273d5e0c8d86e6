use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::workflow::{Connection, ExecutionResult, NewWorkflow, Workflow};

/// Request body for creating a workflow
#[derive(Debug, Deserialize)]
pub struct CreateWorkflowRequest {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub agents: Vec<String>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl From<CreateWorkflowRequest> for NewWorkflow {
    fn from(req: CreateWorkflowRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            description: req.description,
            agents: req.agents,
            connections: req.connections,
        }
    }
}

/// Workflow as returned by the API
#[derive(Debug, Serialize)]
pub struct WorkflowResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub agents: Vec<String>,
    pub connections: Vec<Connection>,
}

impl From<&Workflow> for WorkflowResponse {
    fn from(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id().to_string(),
            name: workflow.name().to_string(),
            description: workflow.description().to_string(),
            agents: workflow.agents().to_vec(),
            connections: workflow.connections().to_vec(),
        }
    }
}

/// Create a new workflow
///
/// POST /workflows
pub async fn create_workflow(
    State(state): State<AppState>,
    Json(req): Json<CreateWorkflowRequest>,
) -> Result<(StatusCode, Json<WorkflowResponse>), ApiError> {
    let workflow = state.store.create_workflow(req.into()).await?;

    Ok((StatusCode::CREATED, Json(WorkflowResponse::from(&workflow))))
}

/// List all workflows
///
/// GET /workflows
pub async fn list_workflows(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkflowResponse>>, ApiError> {
    let workflows = state.store.list_workflows().await?;

    Ok(Json(workflows.iter().map(WorkflowResponse::from).collect()))
}

/// Get a workflow by ID
///
/// GET /workflows/:id
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkflowResponse>, ApiError> {
    let workflow = state.store.get_workflow(&id).await?;

    Ok(Json(WorkflowResponse::from(&workflow)))
}

/// Execute a workflow
///
/// POST /workflows/:id/execute
pub async fn execute_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExecutionResult>, ApiError> {
    let result = state.store.execute_workflow(&id).await?;

    Ok(Json(result))
}
