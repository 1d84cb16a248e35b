//! Chat memory operations

use crate::config::API_PREFIX;
use crate::gateway::error::GatewayError;
use crate::gateway::types::{
    BatchDeleteMemoriesRequest, ChatMemory, MemoryFilter, PageList, PageMemoriesRequest,
    ResultEnvelope,
};
use crate::gateway::GatewayClient;

/// Page size the memory listing is fixed to
const MEMORY_PAGE_SIZE: u32 = 10;

impl GatewayClient {
    /// Fetch one page of an agent's memories
    ///
    /// Merges the agent id into the nested filter and fixes the page
    /// size to 10 in descending order; only the page number is caller
    /// controlled.
    pub async fn page_memories(
        &self,
        agent_id: i64,
        filter: MemoryFilter,
        current: u32,
    ) -> Result<ResultEnvelope<PageList<ChatMemory>>, GatewayError> {
        let body = PageMemoriesRequest {
            agent_id,
            chat_memory_filter: MemoryFilter {
                agent_id: Some(agent_id),
                ..filter
            },
            current,
            page_size: MEMORY_PAGE_SIZE,
            sort: "desc".to_string(),
        };
        self.post_json(&format!("{}/chat/memory/pageMemories", API_PREFIX), &body)
            .await
    }

    /// Update an existing memory
    pub async fn update_memory(
        &self,
        memory: &ChatMemory,
    ) -> Result<ResultEnvelope<String>, GatewayError> {
        self.post_json(&format!("{}/chat/memory/updateMemory", API_PREFIX), memory)
            .await
    }

    /// Create a new memory
    pub async fn create_memory(
        &self,
        memory: &ChatMemory,
    ) -> Result<ResultEnvelope<String>, GatewayError> {
        self.post_json(&format!("{}/chat/memory/createMemory", API_PREFIX), memory)
            .await
    }

    /// Delete a batch of memories by id
    pub async fn batch_delete_memories(
        &self,
        ids: Vec<i64>,
    ) -> Result<ResultEnvelope<String>, GatewayError> {
        let body = BatchDeleteMemoriesRequest { ids };
        self.post_json(&format!("{}/chat/memory/batchDelete", API_PREFIX), &body)
            .await
    }
}
