use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::agent::{Agent, NewAgent};

/// Request body for creating an agent
#[derive(Debug, Deserialize)]
pub struct CreateAgentRequest {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl From<CreateAgentRequest> for NewAgent {
    fn from(req: CreateAgentRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            description: req.description,
            capabilities: req.capabilities,
            config: req.config,
        }
    }
}

/// Agent as returned by the API
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub config: Map<String, Value>,
}

impl From<&Agent> for AgentResponse {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id().to_string(),
            name: agent.name().to_string(),
            description: agent.description().to_string(),
            capabilities: agent.capabilities().to_vec(),
            config: agent.config().clone(),
        }
    }
}

/// Create a new agent
///
/// POST /agents
pub async fn create_agent(
    State(state): State<AppState>,
    Json(req): Json<CreateAgentRequest>,
) -> Result<(StatusCode, Json<AgentResponse>), ApiError> {
    let agent = state.store.create_agent(req.into()).await?;

    Ok((StatusCode::CREATED, Json(AgentResponse::from(&agent))))
}

/// List all agents
///
/// GET /agents
pub async fn list_agents(
    State(state): State<AppState>,
) -> Result<Json<Vec<AgentResponse>>, ApiError> {
    let agents = state.store.list_agents().await?;

    Ok(Json(agents.iter().map(AgentResponse::from).collect()))
}

/// Get an agent by ID
///
/// GET /agents/:id
pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AgentResponse>, ApiError> {
    let agent = state.store.get_agent(&id).await?;

    Ok(Json(AgentResponse::from(&agent)))
}
