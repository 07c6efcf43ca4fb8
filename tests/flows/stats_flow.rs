/// Stats and metrics surface flow: counters, hit rate, degraded-mode
/// visibility, administrative flush.
#[path = "../common/mod.rs"]
mod common;

use common::test_server::cache_status;
use common::{TestClient, TestNotes, TestServer};
use serde_json::Value;

#[tokio::test]
async fn test_stats_reflect_traffic() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    client
        .post_json("/api/notes", &TestNotes::groceries())
        .await;

    // One miss, then three hits.
    for _ in 0..4 {
        client.get("/api/notes").await;
    }

    let stats: Value = client.get("/api/stats").await.json().await.unwrap();
    assert_eq!(stats["total_requests"], 4);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["hits"], 3);
    assert_eq!(stats["hit_rate_percent"], 75.0);
    assert_eq!(stats["cache_connected"], true);
    assert_eq!(stats["cached_keys"], 1);
    assert!(stats["avg_response_time_ms"].as_f64().unwrap() > 0.0);

    server.shutdown();
}

#[tokio::test]
async fn test_degraded_stats_report_disconnected_without_polluting_counters() {
    let server = TestServer::start_degraded()
        .await
        .expect("server failed to start");
    let client = TestClient::new(server.addr());

    for _ in 0..5 {
        client.get("/api/notes").await;
    }

    let stats: Value = client.get("/api/stats").await.json().await.unwrap();
    assert_eq!(stats["cache_connected"], false);
    assert_eq!(stats["cached_keys"], Value::Null);
    assert_eq!(stats["total_requests"], 5);
    // Unavailable-backend attempts count as neither hits nor misses.
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);

    server.shutdown();
}

#[tokio::test]
async fn test_flush_resets_cached_entries_but_not_counters() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    client
        .post_json("/api/notes", &TestNotes::meeting())
        .await;
    client.get("/api/notes").await;
    assert_eq!(server.store.len(), 1);

    let flushed = client.post_empty("/api/cache/flush").await;
    assert_eq!(flushed.status(), 200);
    let flushed: Value = flushed.json().await.unwrap();
    assert_eq!(flushed["flushed"], true);
    assert_eq!(server.store.len(), 0);

    // Counters are monotonic: the flush does not reset them.
    let stats: Value = client.get("/api/stats").await.json().await.unwrap();
    assert_eq!(stats["total_requests"], 1);

    // And the next read repopulates.
    let next = client.get("/api/notes").await;
    assert_eq!(cache_status(&next), "MISS");

    server.shutdown();
}

#[tokio::test]
async fn test_metrics_exposition_end_to_end() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    client.get("/api/notes").await;

    let response = client.get("/metrics").await;
    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();

    assert!(body.contains("# TYPE ferronote_uptime_seconds gauge"));
    assert!(body.contains("ferronote_cache_requests_total 1"));
    assert!(body.contains("ferronote_cache_misses_total 1"));
    assert!(body.contains("ferronote_dependency_up{dependency=\"cache\"} 1"));
    assert!(body.contains("ferronote_dependency_up{dependency=\"database\"} 1"));
    assert!(body.contains("ferronote_resident_memory_bytes"));

    server.shutdown();
}
