//! Realtime Integration Tests
//!
//! End-to-end tests for the WebSocket subscription protocol: subscribe and
//! unsubscribe control frames, ROOM_UPDATE fan-out after REST mutations,
//! room isolation, and tolerance for malformed frames.
//!
//! Run with: cargo test -p integration-tests --test realtime_tests

use integration_tests::{
    assert_json, assert_silent, fixtures::*, read_json, send_json, subscribe, unsubscribe,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

/// Create a room and return its response
async fn create_room(server: &TestServer) -> RoomResponse {
    let response = server.post_empty("/rooms").await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_subscriber_receives_update_on_code_change() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room.id).await.unwrap();

    let request = UpdateCodeRequest::new("let live = true;");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();

    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    assert_eq!(event.event_type, "ROOM_UPDATE");
    assert_eq!(event.room_id, room.id);
    assert_eq!(event.room["code"], "let live = true;");
}

#[tokio::test]
async fn test_event_carries_full_room_snapshot() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room.id).await.unwrap();

    server
        .post_empty(&format!("/rooms/{}/join", room.id))
        .await
        .unwrap();

    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();

    // The payload is a complete snapshot, not a delta
    assert_eq!(event.room["id"], room.id);
    assert_eq!(event.room["language"], "javascript");
    assert_eq!(event.room["participants"], 2);
    assert!(event.room["code"].is_string());
    assert!(event.room["createdAt"].is_i64());
}

#[tokio::test]
async fn test_rooms_are_isolated() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room_a = create_room(&server).await;
    let room_b = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room_a.id).await.unwrap();

    // A mutation in room B must not reach room A's subscriber
    let request = UpdateCodeRequest::new("other room");
    server
        .patch(&format!("/rooms/{}/code", room_b.id), &request)
        .await
        .unwrap();
    assert_silent(&mut ws).await.unwrap();

    // A mutation in room A still arrives
    let request = UpdateCodeRequest::new("own room");
    server
        .patch(&format!("/rooms/{}/code", room_a.id), &request)
        .await
        .unwrap();

    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    assert_eq!(event.room_id, room_a.id);
    assert_eq!(event.room["code"], "own room");
}

#[tokio::test]
async fn test_subscribe_is_case_insensitive() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room.id.to_lowercase()).await.unwrap();

    let request = UpdateCodeRequest::new("case folded");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();

    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    // The event names the canonical key, not the casing the client sent
    assert_eq!(event.room_id, room.id);
}

#[tokio::test]
async fn test_unsubscribe_stops_updates() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room.id).await.unwrap();

    let request = UpdateCodeRequest::new("first");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();
    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    assert_eq!(event.room["code"], "first");

    unsubscribe(&mut ws, &room.id).await.unwrap();

    let request = UpdateCodeRequest::new("second");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();
    assert_silent(&mut ws).await.unwrap();
}

#[tokio::test]
async fn test_two_subscribers_both_receive() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws1 = server.connect_ws().await.unwrap();
    let mut ws2 = server.connect_ws().await.unwrap();
    subscribe(&mut ws1, &room.id).await.unwrap();
    subscribe(&mut ws2, &room.id).await.unwrap();

    let request = UpdateCodeRequest::new("shared edit");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();

    let event1 = RoomUpdateEvent::from_value(read_json(&mut ws1).await.unwrap()).unwrap();
    let event2 = RoomUpdateEvent::from_value(read_json(&mut ws2).await.unwrap()).unwrap();
    assert_eq!(event1.room["code"], "shared edit");
    assert_eq!(event2.room["code"], "shared edit");
}

#[tokio::test]
async fn test_events_arrive_in_mutation_order() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room.id).await.unwrap();

    for i in 1..=5 {
        let request = UpdateCodeRequest::new(&format!("revision {i}"));
        server
            .patch(&format!("/rooms/{}/code", room.id), &request)
            .await
            .unwrap();
    }

    for i in 1..=5 {
        let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
        assert_eq!(event.room["code"], format!("revision {i}"));
    }
}

#[tokio::test]
async fn test_malformed_frames_are_ignored() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();

    // None of these should terminate the connection
    use futures_util::SinkExt;
    use tokio_tungstenite::tungstenite::Message;
    ws.send(Message::Text("not json at all".to_string()))
        .await
        .unwrap();
    send_json(&mut ws, &json!({ "action": "destroy", "roomId": room.id }))
        .await
        .unwrap();
    send_json(&mut ws, &json!({ "roomId": room.id })).await.unwrap();
    send_json(&mut ws, &json!({ "action": "subscribe" }))
        .await
        .unwrap();

    // The connection still works for a real subscription afterwards
    subscribe(&mut ws, &room.id).await.unwrap();

    let request = UpdateCodeRequest::new("still alive");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();

    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    assert_eq!(event.room["code"], "still alive");
}

#[tokio::test]
async fn test_join_and_leave_update_participant_count() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let mut ws = server.connect_ws().await.unwrap();
    subscribe(&mut ws, &room.id).await.unwrap();

    server
        .post_empty(&format!("/rooms/{}/join", room.id))
        .await
        .unwrap();
    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    assert_eq!(event.room["participants"], 2);

    server
        .post_empty(&format!("/rooms/{}/leave", room.id))
        .await
        .unwrap();
    let event = RoomUpdateEvent::from_value(read_json(&mut ws).await.unwrap()).unwrap();
    assert_eq!(event.room["participants"], 1);
}

#[tokio::test]
async fn test_closed_subscriber_does_not_block_others() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room = create_room(&server).await;

    let ws1 = server.connect_ws().await.unwrap();
    let mut ws2 = server.connect_ws().await.unwrap();

    {
        let mut ws1 = ws1;
        subscribe(&mut ws1, &room.id).await.unwrap();
        // ws1 drops here without unsubscribing
    }
    subscribe(&mut ws2, &room.id).await.unwrap();

    let request = UpdateCodeRequest::new("survivors only");
    server
        .patch(&format!("/rooms/{}/code", room.id), &request)
        .await
        .unwrap();

    let event = RoomUpdateEvent::from_value(read_json(&mut ws2).await.unwrap()).unwrap();
    assert_eq!(event.room["code"], "survivors only");
}
