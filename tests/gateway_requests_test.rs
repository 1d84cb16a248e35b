//! Integration tests for gateway request shaping
//!
//! These tests verify the exact HTTP calls each operation produces:
//! method selection, path, and body shaping rules.

use chatbi_client::gateway::types::{Agent, MemoryFilter, Plugin, PluginFilter};
use chatbi_client::gateway::GatewayClient;
use mockito::{Matcher, Server};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_agent_save_switches_method_on_id() {
    let mut server = Server::new_async().await;

    let create = server
        .mock("POST", "/chatbi/api/chat/agent")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "Growth Assistant",
            "status": 1,
        })))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"id": 7, "name": "Growth Assistant", "status": 1}}"#)
        .create_async()
        .await;

    let update = server
        .mock("PUT", "/chatbi/api/chat/agent")
        .match_body(Matcher::Json(serde_json::json!({
            "id": 7,
            "name": "Growth Assistant",
            "status": 1,
        })))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"id": 7, "name": "Growth Assistant", "status": 1}}"#)
        .create_async()
        .await;

    let client = GatewayClient::new(server.url());

    // No id: POST, and the unset status is defaulted to enabled.
    let fresh = Agent {
        name: Some("Growth Assistant".to_string()),
        ..Default::default()
    };
    let saved = client.save_agent(&fresh).await.unwrap().data.unwrap();
    create.assert_async().await;
    assert_eq!(saved.id, Some(7));

    // With an id: PUT, with the unset status again defaulted to enabled.
    let edited = Agent {
        id: Some(7),
        name: Some("Growth Assistant".to_string()),
        status: None,
        ..Default::default()
    };
    client.save_agent(&edited).await.unwrap();
    update.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_metric_listing_wraps_model_id_and_pins_paging() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chatbi/api/semantic/metric/queryMetric")
        .match_body(Matcher::Json(serde_json::json!({
            "modelIds": [99],
            "current": 1,
            "pageSize": 2000,
        })))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"current": 1, "pageSize": 2000, "total": 0, "list": []}}"#)
        .create_async()
        .await;

    let client = GatewayClient::new(server.url());
    client.query_metrics(99).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_memory_paging_fixes_size_and_sort() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chatbi/api/chat/memory/pageMemories")
        .match_body(Matcher::Json(serde_json::json!({
            "agentId": 5,
            "chatMemoryFilter": {"agentId": 5},
            "current": 1,
            "pageSize": 10,
            "sort": "desc",
        })))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"current": 1, "pageSize": 10, "total": 0, "list": []}}"#)
        .create_async()
        .await;

    let client = GatewayClient::new(server.url());
    client
        .page_memories(5, MemoryFilter::default(), 1)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn test_plugin_lifecycle_calls() {
    let mut server = Server::new_async().await;

    let query = server
        .mock("POST", "/chatbi/api/chat/plugin/query")
        .match_body(Matcher::Json(serde_json::json!({"type": "WEB_SERVICE"})))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": [{"id": 3, "type": "WEB_SERVICE", "name": "forecast"}]}"#)
        .create_async()
        .await;

    let delete = server
        .mock("DELETE", "/chatbi/api/chat/plugin/3")
        .with_status(200)
        .with_body(r#"{"code": 200, "data": true}"#)
        .create_async()
        .await;

    let client = GatewayClient::new(server.url());

    let filter = PluginFilter {
        plugin_type: Some("WEB_SERVICE".to_string()),
        ..Default::default()
    };
    let plugins = client.query_plugins(&filter).await.unwrap().data.unwrap();
    query.assert_async().await;
    assert_eq!(plugins[0].name.as_deref(), Some("forecast"));

    let deleted = client.delete_plugin(3).await.unwrap();
    delete.assert_async().await;
    assert_eq!(deleted.data, Some(true));
}

#[tokio::test]
#[serial]
async fn test_plugin_save_passes_record_through_unchanged() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chatbi/api/chat/plugin")
        .match_body(Matcher::Json(serde_json::json!({
            "type": "WEB_PAGE",
            "name": "ops dashboard",
            "dataSetList": [10, 11],
        })))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"id": 12}}"#)
        .create_async()
        .await;

    let client = GatewayClient::new(server.url());
    let plugin = Plugin {
        plugin_type: Some("WEB_PAGE".to_string()),
        name: Some("ops dashboard".to_string()),
        data_set_list: Some(vec![10, 11]),
        ..Default::default()
    };
    client.save_plugin(&plugin).await.unwrap();

    mock.assert_async().await;
}
