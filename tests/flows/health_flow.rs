/// Health surface flow: liveness never probes, readiness folds
/// required/optional probes into 200/503.
#[path = "../common/mod.rs"]
mod common;

use common::{TestClient, TestServer};
use ferronote_application::ports::ConnectionState;
use serde_json::Value;

#[tokio::test]
async fn test_liveness_and_readiness_when_healthy() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    let live = client.get("/health/live").await;
    assert_eq!(live.status(), 200);
    let live: Value = live.json().await.unwrap();
    assert_eq!(live["status"], "alive");
    assert!(live["pid"].as_u64().unwrap() > 0);

    let ready = client.get("/health/ready").await;
    assert_eq!(ready.status(), 200);
    let ready: Value = ready.json().await.unwrap();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["checks"]["database"]["status"], "connected");
    assert_eq!(ready["checks"]["cache"]["status"], "connected");
    assert!(ready["checks"]["database"]["latency_ms"].as_f64().unwrap() >= 0.0);

    server.shutdown();
}

#[tokio::test]
async fn test_cache_outage_leaves_service_ready_with_warning() {
    let server = TestServer::start_degraded()
        .await
        .expect("server failed to start");
    let client = TestClient::new(server.addr());

    let ready = client.get("/health/ready").await;
    assert_eq!(ready.status(), 200);
    let body: Value = ready.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["cache"]["status"], "disconnected");
    assert!(body["checks"]["cache"]["warning"].is_string());

    // The non-probing snapshot agrees.
    let snapshot: Value = client.get("/health").await.json().await.unwrap();
    assert_eq!(snapshot["status"], "ok");
    assert_eq!(snapshot["connections"]["cache"], "disconnected");
    assert_eq!(snapshot["connections"]["database"], "connected");

    server.shutdown();
}

#[tokio::test]
async fn test_database_outage_flips_readiness_to_503() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    server.pool.close().await;

    let ready = client.get("/health/ready").await;
    assert_eq!(ready.status(), 503);
    let body: Value = ready.json().await.unwrap();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["database"]["status"], "disconnected");

    // Liveness is process-only and must survive the outage.
    assert_eq!(client.get("/health/live").await.status(), 200);

    server.shutdown();
}

#[tokio::test]
async fn test_memory_check_is_always_present() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    let ready: Value = client.get("/health/ready").await.json().await.unwrap();
    let memory = &ready["checks"]["memory"];
    assert!(memory.is_object());
    assert!(memory["detail"].is_string());

    server.shutdown();
}

#[tokio::test]
async fn test_cache_recovery_is_visible_to_health() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    server.store.set_state(ConnectionState::Disconnected);
    let degraded: Value = client.get("/health/ready").await.json().await.unwrap();
    assert_eq!(degraded["checks"]["cache"]["status"], "disconnected");

    server.store.set_state(ConnectionState::Ready);
    let recovered: Value = client.get("/health/ready").await.json().await.unwrap();
    assert_eq!(recovered["checks"]["cache"]["status"], "connected");

    server.shutdown();
}
