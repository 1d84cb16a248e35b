//! Backend record shapes
//!
//! Typed request and response structures for the management API. The
//! gateway attaches pagination and filter envelopes but does not
//! validate or transform the records themselves; optional fields mirror
//! what the backend may omit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform success/payload wrapper returned by every backend call
///
/// Envelope-level error codes are passed through uninterpreted; callers
/// decide what a non-zero `code` means.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope<T> {
    /// Backend status code for the call
    pub code: i32,
    /// Human-readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Payload, absent on failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Backend trace identifier for the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// One page of a paged listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageList<T> {
    /// Page number of this page (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    /// Requested page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Total records across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Records on this page
    #[serde(default)]
    pub list: Vec<T>,
}

/// A conversational agent definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Backend identifier; absent for not-yet-saved agents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Enabled flag (1 enabled, 0 disabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Example questions surfaced to users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    /// Serialized tool configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<String>,
    /// When the agent was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the agent was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A chat plugin definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Backend identifier; absent for not-yet-saved plugins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Plugin kind tag (e.g. WEB_PAGE, WEB_SERVICE)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plugin_type: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Trigger pattern matched against questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Data sets the plugin is bound to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_list: Option<Vec<i64>>,
    /// Serialized plugin configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Maintainer comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// When the plugin was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the plugin was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filter for the plugin listing; passed through to the backend as-is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginFilter {
    /// Restrict to one plugin kind
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plugin_type: Option<String>,
    /// Match against plugin names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Match against trigger patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Restrict to plugins bound to this data set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_set_id: Option<i64>,
}

/// A remembered question/answer pair used to steer future parsing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMemory {
    /// Backend identifier; absent for not-yet-saved memories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Agent the memory belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    /// Query that produced the memory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<i64>,
    /// Remembered question text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Schema snapshot the answer was generated against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_schema: Option<String>,
    /// Generated SQL for the remembered question
    #[serde(rename = "s2sql", skip_serializing_if = "Option::is_none")]
    pub s2_sql: Option<String>,
    /// Review status (e.g. PENDING, ENABLED, DISABLED)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Model review verdict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_review_ret: Option<String>,
    /// Model review comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_review_cmt: Option<String>,
    /// Human review verdict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_review_ret: Option<String>,
    /// Human review comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_review_cmt: Option<String>,
    /// When the memory was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the memory was last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Filter for the memory listing
///
/// The gateway merges the target agent id into this filter before
/// sending, so callers only set the content criteria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryFilter {
    /// Agent the memories belong to; filled in by the gateway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    /// Match against remembered questions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Restrict to one review status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request body for the paged memory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMemoriesRequest {
    /// Agent the memories belong to
    pub agent_id: i64,
    /// Content criteria with the agent id merged in
    pub chat_memory_filter: MemoryFilter,
    /// Page number to fetch (1-based)
    pub current: u32,
    /// Fixed page size
    pub page_size: u32,
    /// Fixed sort order
    pub sort: String,
}

/// Request body for the batch memory deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteMemoriesRequest {
    /// Identifiers of the memories to delete
    pub ids: Vec<i64>,
}

/// Request body for the paged metric listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPageRequest {
    /// Models whose metrics are listed
    pub model_ids: Vec<i64>,
    /// Page number to fetch (1-based)
    pub current: u32,
    /// Fixed page size
    pub page_size: u32,
}

/// A metric defined on a semantic model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Technical name used in queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_name: Option<String>,
    /// Model the metric is defined on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A dimension defined on a semantic model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Technical name used in queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_name: Option<String>,
    /// Model the dimension is defined on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Schema listing for one data set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetSchema {
    /// Dimensions available on the data set
    #[serde(default)]
    pub list: Vec<Dimension>,
}

/// A node in the domain / data-set tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSetNode {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Parent node identifier; absent at the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Technical name used in queries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biz_name: Option<String>,
    /// Node kind tag (e.g. DOMAIN, DATA_SET)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Child nodes
    #[serde(default)]
    pub children: Vec<DataSetNode>,
}
