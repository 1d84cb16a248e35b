//! Chat plugin operations

use crate::config::API_PREFIX;
use crate::gateway::error::GatewayError;
use crate::gateway::types::{Plugin, PluginFilter, ResultEnvelope};
use crate::gateway::GatewayClient;

impl GatewayClient {
    /// List plugins matching a caller-supplied filter
    pub async fn query_plugins(
        &self,
        filter: &PluginFilter,
    ) -> Result<ResultEnvelope<Vec<Plugin>>, GatewayError> {
        self.post_json(&format!("{}/chat/plugin/query", API_PREFIX), filter)
            .await
    }

    /// Create or update a plugin
    ///
    /// Creates with POST when the plugin has no id, updates with PUT
    /// when it does; the record is passed through unchanged.
    pub async fn save_plugin(
        &self,
        plugin: &Plugin,
    ) -> Result<ResultEnvelope<Plugin>, GatewayError> {
        let path = format!("{}/chat/plugin", API_PREFIX);
        match plugin.id {
            Some(_) => self.put_json(&path, plugin).await,
            None => self.post_json(&path, plugin).await,
        }
    }

    /// Delete a plugin by id
    pub async fn delete_plugin(&self, id: i64) -> Result<ResultEnvelope<bool>, GatewayError> {
        self.delete(&format!("{}/chat/plugin/{}", API_PREFIX, id))
            .await
    }
}
