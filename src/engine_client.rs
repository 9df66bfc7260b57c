//! UDS client for the face-engine daemon
//!
//! Speaks the engine's length-prefixed JSON protocol: 4-byte big-endian
//! length followed by a JSON body, both directions. Each pipeline call is a
//! fresh connect/request/response exchange.

use crate::analyzer::{dominant_emotion, FaceAnalyzer, FaceRegion};
use crate::error::{MoodError, Result};
use async_trait::async_trait;
use image::DynamicImage;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::debug;

/// Engine connection settings, fixed at construction.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// IPC socket path of the face-engine daemon
    pub socket_path: String,
    /// Detector backend the engine should use; `ssd` favors latency over accuracy
    pub detector_backend: String,
    /// Deadline applied to connect and to each read
    pub timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            socket_path: "/tmp/face_engine.sock".to_string(),
            detector_backend: "ssd".to_string(),
            timeout: Duration::from_millis(5000),
        }
    }
}

/// Client for the face-engine daemon.
pub struct EngineClient {
    config: EngineConfig,
}

#[derive(Deserialize)]
struct EngineResponse {
    ok: bool,
    output: Value,
    #[allow(dead_code)]
    latency_ms: u64,
}

impl EngineClient {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Request fields shared by every op.
    ///
    /// `enforce_detection: false` is load-bearing: the engine must answer
    /// normally when no face is present instead of raising. `silent: true`
    /// keeps the engine's own console output out of our channels.
    fn base_input(&self, image: &DynamicImage) -> Value {
        let rgb = image.to_rgb8();
        json!({
            "data": rgb.as_raw(),
            "width": rgb.width(),
            "height": rgb.height(),
            "enforce_detection": false,
            "detector_backend": self.config.detector_backend,
            "silent": true,
        })
    }

    /// Send one request frame and read one response frame.
    async fn roundtrip(&self, request: Value) -> Result<Value> {
        let request_bytes = serde_json::to_vec(&request)?;

        let mut stream = tokio::time::timeout(
            self.config.timeout,
            UnixStream::connect(&self.config.socket_path),
        )
        .await
        .map_err(|_| MoodError::Transport("Connection timeout".into()))?
        .map_err(|e| MoodError::Transport(format!("Connect failed: {}", e)))?;

        // Write length prefix (4 bytes big-endian) + body
        let len_bytes = (request_bytes.len() as u32).to_be_bytes();
        stream
            .write_all(&len_bytes)
            .await
            .map_err(|e| MoodError::Transport(format!("Write failed: {}", e)))?;
        stream
            .write_all(&request_bytes)
            .await
            .map_err(|e| MoodError::Transport(format!("Write failed: {}", e)))?;
        stream
            .flush()
            .await
            .map_err(|e| MoodError::Transport(format!("Flush failed: {}", e)))?;

        // Read response length
        let mut len_buf = [0u8; 4];
        tokio::time::timeout(self.config.timeout, stream.read_exact(&mut len_buf))
            .await
            .map_err(|_| MoodError::Transport("Read timeout".into()))?
            .map_err(|e| MoodError::Transport(format!("Read failed: {}", e)))?;
        let response_len = u32::from_be_bytes(len_buf) as usize;

        // Read response body
        let mut response_buf = vec![0u8; response_len];
        tokio::time::timeout(self.config.timeout, stream.read_exact(&mut response_buf))
            .await
            .map_err(|_| MoodError::Transport("Read timeout".into()))?
            .map_err(|e| MoodError::Transport(format!("Read failed: {}", e)))?;

        let response: EngineResponse = serde_json::from_slice(&response_buf)?;
        debug!("engine response ok={}", response.ok);

        if !response.ok {
            let message = response
                .output
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown engine error");
            return Err(MoodError::Engine(message.to_string()));
        }

        Ok(response.output)
    }
}

#[async_trait]
impl FaceAnalyzer for EngineClient {
    async fn analyze_emotion(&self, image: &DynamicImage) -> Result<Option<String>> {
        let mut input = self.base_input(image);
        input["actions"] = json!(["emotion"]);

        let output = self
            .roundtrip(json!({ "op": "face.analyze", "input": input }))
            .await?;
        Ok(dominant_emotion(&output))
    }

    async fn extract_faces(&self, image: &DynamicImage) -> Result<Vec<FaceRegion>> {
        let output = self
            .roundtrip(json!({ "op": "face.extract", "input": self.base_input(image) }))
            .await?;
        let faces: Vec<FaceRegion> = serde_json::from_value(output)?;
        Ok(faces)
    }
}
