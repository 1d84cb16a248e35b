//! Chat answer data model
//!
//! Defines the structures a completed chat query deserializes into.
//! These are constructed from backend responses and held transiently by
//! the displaying view; the resolver treats them as read-only.

use serde::{Deserialize, Serialize};

/// Query-mode tag attached to a chat answer
///
/// Selects which renderer displays the answer. Modes the backend may add
/// in the future arrive as `Other` and fall into the structured-data
/// rendering path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryMode {
    /// Free-form text produced by the answering model
    PlainText,
    /// Text produced by an external web service plugin
    WebService,
    /// An embedded web page rendered by identifier
    WebPage,
    /// Any other tag; treated as structured (chart/table) data
    Other(String),
}

impl QueryMode {
    /// Wire representation of the mode tag
    pub fn as_str(&self) -> &str {
        match self {
            QueryMode::PlainText => "PLAIN_TEXT",
            QueryMode::WebService => "WEB_SERVICE",
            QueryMode::WebPage => "WEB_PAGE",
            QueryMode::Other(tag) => tag,
        }
    }

    /// Whether the mode renders as plain text (chat answer rather than data)
    pub fn is_text_like(&self) -> bool {
        matches!(self, QueryMode::PlainText | QueryMode::WebService)
    }
}

impl From<String> for QueryMode {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PLAIN_TEXT" => QueryMode::PlainText,
            "WEB_SERVICE" => QueryMode::WebService,
            "WEB_PAGE" => QueryMode::WebPage,
            _ => QueryMode::Other(tag),
        }
    }
}

impl From<QueryMode> for String {
    fn from(mode: QueryMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Authorization notice attached to a restricted query result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAuthorization {
    /// Human-readable restriction message shown above the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One completed (or in-flight) chat query result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Backend identifier of the query, required for web-page rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<i64>,
    /// Mode tag selecting the renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_mode: Option<QueryMode>,
    /// Short natural-language summary of the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_summary: Option<String>,
    /// Text body, present when the mode is text-like
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_result: Option<String>,
    /// Query execution time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_time_cost: Option<u64>,
    /// Authorization notice, present when the result was restricted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_authorization: Option<QueryAuthorization>,
}

impl QueryResult {
    /// Execution time worth surfacing, ignoring a zero cost
    pub fn time_cost(&self) -> Option<u64> {
        self.query_time_cost.filter(|cost| *cost > 0)
    }
}

/// Structured sub-type a structured-data renderer reports back
///
/// Controls whether the table/chart toggle affordance is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Metric rendered as a trend (line) chart
    MetricTrend,
    /// Metric rendered as a bar chart
    MetricBar,
    /// Single-value metric card
    MetricCard,
    /// Tabular result
    Table,
    /// Plain textual rendering of structured data
    Text,
}

impl ContentKind {
    /// Whether this sub-type has an alternate tabular representation
    pub fn supports_table_toggle(&self) -> bool {
        matches!(self, ContentKind::MetricTrend | ContentKind::MetricBar)
    }
}
