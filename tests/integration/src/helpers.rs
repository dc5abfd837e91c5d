//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and talking to the realtime WebSocket endpoint.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use interview_api::{create_app, create_app_state};
use interview_common::{try_init_tracing, AppConfig};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message};

/// How long to wait for a single WebSocket frame before failing a test
pub const WS_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait when asserting that NO frame arrives
pub const WS_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Grace period after sending a control frame before mutating state.
///
/// The subscribe protocol has no acknowledgement, so tests give the server
/// a moment to process the frame before triggering broadcasts.
pub const SUBSCRIBE_SETTLE: Duration = Duration::from_millis(300);

/// Client-side WebSocket stream type
pub type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with default configuration
    pub async fn start() -> Result<Self> {
        Self::start_with_config(AppConfig::default()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Log output is opt-in via RUST_LOG when debugging a failing test
        let _ = try_init_tracing();

        // Create app state
        let state = create_app_state(config);

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port so parallel tests never collide
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the WebSocket URL for the server
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with no body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.patch(&url).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }

    /// Open a WebSocket connection to the realtime endpoint
    pub async fn connect_ws(&self) -> Result<WsStream> {
        let (ws, _) = connect_async(self.ws_url()).await?;
        Ok(ws)
    }
}

/// Send a JSON value as a text frame
pub async fn send_json(ws: &mut WsStream, value: &Value) -> Result<()> {
    ws.send(Message::Text(value.to_string())).await?;
    Ok(())
}

/// Read the next text frame as JSON, skipping transport frames
pub async fn read_json(ws: &mut WsStream) -> Result<Value> {
    loop {
        let msg = timeout(WS_TIMEOUT, ws.next())
            .await
            .map_err(|_| anyhow::anyhow!("timed out waiting for WebSocket frame"))?
            .ok_or_else(|| anyhow::anyhow!("WebSocket stream closed"))??;

        if let Message::Text(text) = msg {
            return Ok(serde_json::from_str(&text)?);
        }
    }
}

/// Assert that no text frame arrives within the quiet period
pub async fn assert_silent(ws: &mut WsStream) -> Result<()> {
    let outcome = timeout(WS_QUIET_PERIOD, ws.next()).await;
    match outcome {
        Err(_) => Ok(()),
        Ok(Some(Ok(Message::Text(text)))) => {
            anyhow::bail!("expected no frame, got: {}", text)
        }
        // Transport frames (ping/pong) are fine
        Ok(_) => Ok(()),
    }
}

/// Subscribe to a room and wait for the frame to be processed
pub async fn subscribe(ws: &mut WsStream, room_id: &str) -> Result<()> {
    send_json(ws, &crate::fixtures::subscribe_frame(room_id)).await?;
    tokio::time::sleep(SUBSCRIBE_SETTLE).await;
    Ok(())
}

/// Unsubscribe from a room and wait for the frame to be processed
pub async fn unsubscribe(ws: &mut WsStream, room_id: &str) -> Result<()> {
    send_json(ws, &crate::fixtures::unsubscribe_frame(room_id)).await?;
    tokio::time::sleep(SUBSCRIBE_SETTLE).await;
    Ok(())
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
