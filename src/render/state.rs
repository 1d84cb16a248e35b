//! Per-result display state
//!
//! Caller-owned state for one displayed result: the table/chart toggle
//! and the structured sub-type last reported by the renderer. The state
//! is scoped to a single result and reset when a new one replaces it.

use crate::render::data::ContentKind;

/// Reactive display state for one rendered result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    show_table: bool,
    content_kind: Option<ContentKind>,
}

impl DisplayState {
    /// Create display state for a freshly arrived result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which structured sub-type the renderer actually produced
    pub fn report_content_kind(&mut self, kind: ContentKind) {
        self.content_kind = Some(kind);
    }

    /// Structured sub-type last reported by the renderer, if any
    pub fn content_kind(&self) -> Option<ContentKind> {
        self.content_kind
    }

    /// Flip the forced tabular view on or off
    ///
    /// Pure view state: toggling only changes which of the two available
    /// representations is shown, it never re-fetches data.
    pub fn set_show_table(&mut self, show: bool) {
        self.show_table = show;
    }

    /// Whether the tabular representation is currently forced
    pub fn show_table(&self) -> bool {
        self.show_table
    }

    /// Whether the table/chart toggle affordance should be offered
    pub fn toggle_visible(&self) -> bool {
        self.content_kind
            .map(|kind| kind.supports_table_toggle())
            .unwrap_or(false)
    }

    /// Clear all state when a new result replaces the displayed one
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_hidden_until_kind_reported() {
        let state = DisplayState::new();
        assert!(!state.toggle_visible());
    }

    #[test]
    fn test_toggle_visible_for_trend_and_bar_only() {
        let mut state = DisplayState::new();

        state.report_content_kind(ContentKind::MetricTrend);
        assert!(state.toggle_visible());

        state.report_content_kind(ContentKind::MetricBar);
        assert!(state.toggle_visible());

        state.report_content_kind(ContentKind::Table);
        assert!(!state.toggle_visible());

        state.report_content_kind(ContentKind::MetricCard);
        assert!(!state.toggle_visible());
    }

    #[test]
    fn test_reset_clears_toggle_and_kind() {
        let mut state = DisplayState::new();
        state.report_content_kind(ContentKind::MetricTrend);
        state.set_show_table(true);
        assert!(state.show_table());

        state.reset();
        assert!(!state.show_table());
        assert_eq!(state.content_kind(), None);
        assert!(!state.toggle_visible());
    }
}
