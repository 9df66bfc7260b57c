//! Face-engine collaborator seam
//!
//! The pipeline only ever talks to the external face/emotion engine through
//! the [`FaceAnalyzer`] trait, so tests can substitute a scripted fake and
//! the orchestration logic stays independent of the model behind it.

use crate::error::Result;
use async_trait::async_trait;
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single face region returned by the extraction op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRegion {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Narrow interface to the external face/emotion engine.
///
/// `analyze_emotion` resolves to the normalized dominant-emotion label for
/// the first detected face, or `None` when the engine produced no face-level
/// result. Neither call treats "no face" as an error; only transport or
/// engine-side failures return `Err`.
#[async_trait]
pub trait FaceAnalyzer: Send + Sync {
    async fn analyze_emotion(&self, image: &DynamicImage) -> Result<Option<String>>;
    async fn extract_faces(&self, image: &DynamicImage) -> Result<Vec<FaceRegion>>;
}

/// Collapse the engine's heterogeneous analyze output into a single label.
///
/// The analyze op may return an ordered list of per-face records (first face
/// wins), a single record, or nothing at all; all three shapes reduce here to
/// `Option<lowercase label>`.
pub fn dominant_emotion(output: &Value) -> Option<String> {
    let record = match output {
        Value::Array(records) => records.first()?,
        Value::Object(_) => output,
        _ => return None,
    };
    record
        .get("dominant_emotion")
        .and_then(Value::as_str)
        .map(str::to_lowercase)
}
