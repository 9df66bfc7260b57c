//! mood_sense - single-shot mood inference from a still image
//!
//! Decodes one encoded image payload, asks the external face-engine daemon for
//! the dominant facial emotion, and collapses the answer into a coarse mood
//! ({Happy, Sad, Energetic, Neutral}) for downstream consumers such as
//! ambient lighting, playlist selection, or UI theming.

mod analyzer;
mod decode;
mod engine_client;
mod error;
mod mood;
mod pipeline;

pub use analyzer::{dominant_emotion, FaceAnalyzer, FaceRegion};
pub use decode::decode_data_uri;
pub use engine_client::{EngineClient, EngineConfig};
pub use error::{MoodError, Result};
pub use mood::{FaceCheck, Mood, MoodResult};
pub use pipeline::detect_mood;
