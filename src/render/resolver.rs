//! Result presentation resolver
//!
//! Pure decision function mapping a query's lifecycle state to exactly
//! one render decision plus auxiliary indicators. Evaluation order is
//! strict: loading wins over everything, then a reported error, then
//! absence of data; only a completed result reaches renderer selection.

use crate::render::data::{QueryMode, QueryResult};
use crate::render::state::DisplayState;
use thiserror::Error;

/// Errors the resolver can report
///
/// The resolver otherwise degrades gracefully; the only failure is a
/// violated caller contract on web-page results.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// A WEB_PAGE result arrived without a query identifier
    #[error("web page result is missing a query id")]
    MissingQueryId,
}

/// Whether the header labels the step as a chat answer or a data query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Text-like modes (plain text, web service)
    Answer,
    /// Everything else, including structured data and web pages
    Data,
}

impl QueryKind {
    /// Derive the header kind from the caller-declared mode tag
    pub fn from_mode(mode: Option<&QueryMode>) -> Self {
        match mode {
            Some(mode) if mode.is_text_like() => QueryKind::Answer,
            _ => QueryKind::Data,
        }
    }

    /// Short label used when composing the header title
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::Answer => "answer",
            QueryKind::Data => "data",
        }
    }
}

/// Lifecycle phase shown in the header bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    /// Query is still executing
    Running,
    /// Query terminated with an error
    Failed,
    /// Query completed successfully
    Complete,
}

/// Step header above the rendered content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBar {
    /// Answer vs. data labeling
    pub kind: QueryKind,
    /// Lifecycle phase of the query
    pub phase: QueryPhase,
    /// Execution time annotation, surfaced only for privileged viewers
    pub time_cost_ms: Option<u64>,
    /// Whether the table/chart toggle affordance is offered
    pub show_table_toggle: bool,
}

impl HeaderBar {
    /// Human-readable step title
    pub fn title(&self) -> String {
        match self.phase {
            QueryPhase::Running => format!("{} query in progress", self.kind.label()),
            QueryPhase::Failed => format!("{} query failed", self.kind.label()),
            QueryPhase::Complete => format!("{} query", self.kind.label()),
        }
    }
}

/// Parameters for an embedded web-page rendering
#[derive(Debug, Clone, PartialEq)]
pub struct WebPageView {
    /// Identifier of the query whose page is embedded
    pub query_id: i64,
    /// The completed result backing the page
    pub result: QueryResult,
}

/// Parameters for a structured-data (chart/table) rendering
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredView {
    /// The completed result to visualize
    pub result: QueryResult,
    /// Question that produced the result
    pub question: String,
    /// Index of the chart variant to display
    pub chart_index: usize,
    /// Force the tabular representation instead of the chart
    pub force_show_table: bool,
}

/// The renderer selected for one pass; variants are mutually exclusive
#[derive(Debug, Clone, PartialEq)]
pub enum RenderDecision<N> {
    /// Query still executing; show a loading indicator
    Loading,
    /// Query failed; show the tip and an optional on-demand detail
    Error {
        /// Short failure label
        tip: String,
        /// Supplementary detail revealed on demand
        detail: Option<String>,
    },
    /// Caller-supplied content takes precedence over built-in renderers
    Custom(N),
    /// Plain text answer
    Text(String),
    /// Embedded web page
    WebPage(WebPageView),
    /// Structured data shown as a chart or table
    Structured(StructuredView),
}

/// Everything one rendering pass needs to know
#[derive(Debug)]
pub struct ExecuteInput<'a, N> {
    /// Question that produced the result
    pub question: &'a str,
    /// Caller-declared mode tag; drives the header label
    pub query_mode: Option<&'a QueryMode>,
    /// Query is still executing
    pub loading: bool,
    /// Short failure label reported by the backend
    pub error_tip: Option<&'a str>,
    /// Detailed failure message revealed on demand
    pub error_detail: Option<&'a str>,
    /// Completed result, if any
    pub result: Option<&'a QueryResult>,
    /// Whether caller-supplied content may replace built-in renderers
    pub allow_custom_node: bool,
    /// Caller-supplied content
    pub custom_node: Option<N>,
    /// Index of the chart variant to display
    pub chart_index: usize,
    /// A secondary entity switch is loading; content shows a busy overlay
    pub entity_switch_loading: bool,
    /// Viewer is privileged; timing annotations are surfaced
    pub is_developer: bool,
    /// Compact rendering without the step header
    pub is_simple_mode: bool,
}

impl<N> Default for ExecuteInput<'_, N> {
    fn default() -> Self {
        Self {
            question: "",
            query_mode: None,
            loading: false,
            error_tip: None,
            error_detail: None,
            result: None,
            allow_custom_node: false,
            custom_node: None,
            chart_index: 0,
            entity_switch_loading: false,
            is_developer: false,
            is_simple_mode: false,
        }
    }
}

/// Resolved view for one rendering pass
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteView<N> {
    /// Step header; absent for successful results in simple mode
    pub header: Option<HeaderBar>,
    /// Authorization restriction notice, shown above the content
    pub authorization_message: Option<String>,
    /// Natural-language summary, shown above the content
    pub text_summary: Option<String>,
    /// Content shows a busy overlay while an entity switch loads
    pub entity_switch_loading: bool,
    /// The renderer selected for this pass
    pub decision: RenderDecision<N>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve one rendering pass
///
/// Returns `Ok(None)` when there is nothing to render (no loading state,
/// no error, no data). The only error is a WEB_PAGE result without a
/// query identifier, which is a checked caller-contract violation.
pub fn resolve<N>(
    input: ExecuteInput<'_, N>,
    display: &DisplayState,
) -> Result<Option<ExecuteView<N>>, ResolveError> {
    let kind = QueryKind::from_mode(input.query_mode);

    if input.loading {
        return Ok(Some(ExecuteView {
            header: Some(HeaderBar {
                kind,
                phase: QueryPhase::Running,
                time_cost_ms: None,
                show_table_toggle: false,
            }),
            authorization_message: None,
            text_summary: None,
            entity_switch_loading: false,
            decision: RenderDecision::Loading,
        }));
    }

    if let Some(tip) = non_empty(input.error_tip) {
        let time_cost_ms = if input.is_developer {
            input.result.and_then(QueryResult::time_cost)
        } else {
            None
        };
        return Ok(Some(ExecuteView {
            header: Some(HeaderBar {
                kind,
                phase: QueryPhase::Failed,
                time_cost_ms,
                show_table_toggle: false,
            }),
            authorization_message: None,
            text_summary: None,
            entity_switch_loading: false,
            decision: RenderDecision::Error {
                tip: tip.to_string(),
                detail: non_empty(input.error_detail).map(str::to_string),
            },
        }));
    }

    let Some(result) = input.result else {
        return Ok(None);
    };

    let custom_node = if input.allow_custom_node {
        input.custom_node
    } else {
        None
    };

    let decision = if let Some(node) = custom_node {
        RenderDecision::Custom(node)
    } else {
        match result.query_mode.as_ref() {
            Some(mode) if mode.is_text_like() => {
                RenderDecision::Text(result.text_result.clone().unwrap_or_default())
            }
            Some(QueryMode::WebPage) => {
                let query_id = result.query_id.ok_or(ResolveError::MissingQueryId)?;
                RenderDecision::WebPage(WebPageView {
                    query_id,
                    result: result.clone(),
                })
            }
            _ => RenderDecision::Structured(StructuredView {
                result: result.clone(),
                question: input.question.to_string(),
                chart_index: input.chart_index,
                force_show_table: display.show_table(),
            }),
        }
    };

    let header = if input.is_simple_mode {
        None
    } else {
        Some(HeaderBar {
            kind,
            phase: QueryPhase::Complete,
            time_cost_ms: if input.is_developer {
                result.time_cost()
            } else {
                None
            },
            show_table_toggle: display.toggle_visible(),
        })
    };

    Ok(Some(ExecuteView {
        header,
        authorization_message: result
            .query_authorization
            .as_ref()
            .and_then(|auth| auth.message.clone())
            .filter(|message| !message.is_empty()),
        text_summary: result
            .text_summary
            .clone()
            .filter(|summary| !summary.is_empty()),
        entity_switch_loading: input.entity_switch_loading,
        decision,
    }))
}
