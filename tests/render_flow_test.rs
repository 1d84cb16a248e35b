//! Integration tests for the result presentation flow
//!
//! Drives the resolver across a query's lifecycle the way a displaying
//! view would: loading, then a completed result, then toggle state
//! feeding back into the next rendering pass.

use chatbi_client::render::{
    resolve, ContentKind, DisplayState, ExecuteInput, QueryMode, QueryPhase, QueryResult,
    RenderDecision,
};

fn structured_result() -> QueryResult {
    QueryResult {
        query_id: Some(314),
        query_mode: Some(QueryMode::Other("METRIC_TREND".to_string())),
        query_time_cost: Some(420),
        ..Default::default()
    }
}

#[test]
fn test_lifecycle_loading_then_success_then_toggle() {
    let mut display = DisplayState::new();
    let result = structured_result();

    // Phase 1: the query is executing.
    let input: ExecuteInput<'_, ()> = ExecuteInput {
        loading: true,
        ..Default::default()
    };
    let view = resolve(input, &display).unwrap().unwrap();
    assert_eq!(view.decision, RenderDecision::Loading);
    assert_eq!(view.header.unwrap().phase, QueryPhase::Running);

    // Phase 2: the result arrives; the renderer reports a trend chart.
    let input: ExecuteInput<'_, ()> = ExecuteInput {
        question: "visits per week",
        result: Some(&result),
        ..Default::default()
    };
    let view = resolve(input, &display).unwrap().unwrap();
    let structured = match view.decision {
        RenderDecision::Structured(structured) => structured,
        other => panic!("expected Structured decision, got {:?}", other),
    };
    assert!(!structured.force_show_table);
    // No sub-type reported yet, so no toggle affordance.
    assert!(!view.header.unwrap().show_table_toggle);

    display.report_content_kind(ContentKind::MetricTrend);

    // Phase 3: next pass offers the toggle; flipping it forces the table.
    display.set_show_table(true);
    let input: ExecuteInput<'_, ()> = ExecuteInput {
        question: "visits per week",
        result: Some(&result),
        ..Default::default()
    };
    let view = resolve(input, &display).unwrap().unwrap();
    assert!(view.header.unwrap().show_table_toggle);
    match view.decision {
        RenderDecision::Structured(structured) => assert!(structured.force_show_table),
        other => panic!("expected Structured decision, got {:?}", other),
    }

    // A new result replaces the displayed one; state resets.
    display.reset();
    assert!(!display.show_table());
    assert!(!display.toggle_visible());
}

#[test]
fn test_lifecycle_loading_then_failure() {
    let display = DisplayState::new();
    let result = structured_result();

    let input: ExecuteInput<'_, ()> = ExecuteInput {
        loading: true,
        ..Default::default()
    };
    assert_eq!(
        resolve(input, &display).unwrap().unwrap().decision,
        RenderDecision::Loading
    );

    let input: ExecuteInput<'_, ()> = ExecuteInput {
        error_tip: Some("data query failed"),
        error_detail: Some("timeout resolving metric"),
        result: Some(&result),
        is_developer: true,
        ..Default::default()
    };
    let view = resolve(input, &display).unwrap().unwrap();
    assert_eq!(
        view.decision,
        RenderDecision::Error {
            tip: "data query failed".to_string(),
            detail: Some("timeout resolving metric".to_string()),
        }
    );
    let header = view.header.unwrap();
    assert_eq!(header.phase, QueryPhase::Failed);
    assert_eq!(header.time_cost_ms, Some(420));
}

#[test]
fn test_cleared_state_renders_nothing() {
    let input: ExecuteInput<'_, ()> = ExecuteInput::default();
    assert!(resolve(input, &DisplayState::new()).unwrap().is_none());
}
