/// Read-through cache flow:
/// create -> collection miss + populate -> hit -> write invalidates ->
/// next read misses and reflects the write.
#[path = "../common/mod.rs"]
mod common;

use common::test_server::cache_status;
use common::{TestClient, TestNotes, TestServer};
use ferronote_application::ports::ConnectionState;
use serde_json::{json, Value};

#[tokio::test]
async fn test_full_read_through_round_trip() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    // Create a note.
    let created = client.post_json("/api/notes", &TestNotes::groceries()).await;
    assert_eq!(created.status(), 201);
    let created: Value = created.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    // First collection read misses and populates.
    let first = client.get("/api/notes").await;
    assert_eq!(first.status(), 200);
    assert_eq!(cache_status(&first), "MISS");
    let first_body: Value = first.json().await.unwrap();
    assert_eq!(first_body.as_array().unwrap().len(), 1);

    // Second read is a verbatim hit.
    let second = client.get("/api/notes").await;
    assert_eq!(cache_status(&second), "HIT");
    let second_body: Value = second.json().await.unwrap();
    assert_eq!(second_body, first_body);

    // A write invalidates both the item and the collection.
    let updated = client
        .put_json(&format!("/api/notes/{id}"), &json!({"title": "Errands"}))
        .await;
    assert_eq!(updated.status(), 200);

    let after_update = client.get("/api/notes").await;
    assert_eq!(cache_status(&after_update), "MISS");
    let body: Value = after_update.json().await.unwrap();
    assert_eq!(body[0]["title"], "Errands");

    server.shutdown();
}

#[tokio::test]
async fn test_item_reads_follow_the_same_lifecycle() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    let created: Value = client
        .post_json("/api/notes", &TestNotes::meeting())
        .await
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    let path = format!("/api/notes/{id}");

    let first = client.get(&path).await;
    assert_eq!(first.status(), 200);
    assert_eq!(cache_status(&first), "MISS");

    let second = client.get(&path).await;
    assert_eq!(cache_status(&second), "HIT");

    // Delete, then the item is gone and its read is uncached.
    assert_eq!(client.delete(&path).await.status(), 204);
    assert_eq!(client.get(&path).await.status(), 404);

    server.shutdown();
}

#[tokio::test]
async fn test_validation_failures_never_reach_the_store() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    let rejected = client
        .post_json("/api/notes", &TestNotes::blank_title())
        .await;
    assert_eq!(rejected.status(), 400);

    let listed: Value = client.get("/api/notes").await.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 0);

    server.shutdown();
}

#[tokio::test]
async fn test_degraded_cache_keeps_serving_requests() {
    let server = TestServer::start_degraded()
        .await
        .expect("server failed to start");
    let client = TestClient::new(server.addr());

    // Writes still work.
    let created = client
        .post_json("/api/notes", &TestNotes::empty_content())
        .await;
    assert_eq!(created.status(), 201);

    // Every read succeeds straight from the store, marked MISS.
    for _ in 0..3 {
        let response = client.get("/api/notes").await;
        assert_eq!(response.status(), 200);
        assert_eq!(cache_status(&response), "MISS");
    }

    // Nothing was cached along the way.
    assert_eq!(server.store.len(), 0);

    server.shutdown();
}

#[tokio::test]
async fn test_cache_recovery_after_outage() {
    let server = TestServer::start().await.expect("server failed to start");
    let client = TestClient::new(server.addr());

    client
        .post_json("/api/notes", &TestNotes::groceries())
        .await;

    // Outage: reads fall through.
    server.store.set_state(ConnectionState::Disconnected);
    assert_eq!(cache_status(&client.get("/api/notes").await), "MISS");

    // Recovery: the next read repopulates, the one after hits.
    server.store.set_state(ConnectionState::Ready);
    assert_eq!(cache_status(&client.get("/api/notes").await), "MISS");
    assert_eq!(cache_status(&client.get("/api/notes").await), "HIT");

    server.shutdown();
}

#[tokio::test]
async fn test_short_ttl_entries_expire_end_to_end() {
    let server = TestServer::start_with(std::time::Duration::from_millis(150))
        .await
        .expect("server failed to start");
    let client = TestClient::new(server.addr());

    client
        .post_json("/api/notes", &TestNotes::groceries())
        .await;

    assert_eq!(cache_status(&client.get("/api/notes").await), "MISS");
    assert_eq!(cache_status(&client.get("/api/notes").await), "HIT");

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    // The entry lapsed; the read misses and repopulates.
    assert_eq!(cache_status(&client.get("/api/notes").await), "MISS");

    server.shutdown();
}
