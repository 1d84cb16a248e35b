//! Agent management operations

use crate::config::API_PREFIX;
use crate::gateway::error::GatewayError;
use crate::gateway::types::{Agent, ResultEnvelope};
use crate::gateway::GatewayClient;

impl GatewayClient {
    /// List all agents
    pub async fn list_agents(&self) -> Result<ResultEnvelope<Vec<Agent>>, GatewayError> {
        self.get(&format!("{}/chat/agent/getAgentList", API_PREFIX))
            .await
    }

    /// Create or update an agent
    ///
    /// Creates with POST when the agent has no id, updates with PUT when
    /// it does. An unset `status` is defaulted to enabled (1) in the
    /// outgoing body.
    pub async fn save_agent(&self, agent: &Agent) -> Result<ResultEnvelope<Agent>, GatewayError> {
        let mut body = agent.clone();
        if body.status.is_none() {
            body.status = Some(1);
        }

        let path = format!("{}/chat/agent", API_PREFIX);
        match agent.id {
            Some(_) => self.put_json(&path, &body).await,
            None => self.post_json(&path, &body).await,
        }
    }

    /// Delete an agent by id
    pub async fn delete_agent(&self, id: i64) -> Result<ResultEnvelope<bool>, GatewayError> {
        self.delete(&format!("{}/chat/agent/{}", API_PREFIX, id))
            .await
    }

    /// List the available agent tool types
    ///
    /// Legacy-style call issued against the `CHAT_API_BASE_URL` override
    /// rather than the fixed routing prefix; the payload is a loose map
    /// keyed by tool type.
    pub async fn tool_types(&self) -> Result<serde_json::Value, GatewayError> {
        self.get_legacy("agent/getToolTypes").await
    }
}
