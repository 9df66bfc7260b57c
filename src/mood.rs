//! Mood taxonomy and the emitted result record

use serde::{Deserialize, Serialize};

/// Coarse mood category consumed by downstream applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Neutral,
}

impl Mood {
    /// Total mapping from the engine's raw emotion vocabulary.
    ///
    /// High-arousal emotions collapse into `Energetic`; ambiguous, calm, and
    /// failure states collapse into `Neutral`, so a consumer never receives
    /// an unmapped or error-shaped mood.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "surprise" | "angry" => Mood::Energetic,
            "neutral" | "fear" | "disgust" | "error_analysis" => Mood::Neutral,
            _ => Mood::Neutral,
        }
    }
}

/// Outcome of the face-presence check behind a "neutral" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceCheck {
    FaceFound,
    NoFace,
    CheckFailed,
}

/// The single record emitted on stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl MoodResult {
    pub fn new(mood: Mood) -> Self {
        Self { mood, detail: None }
    }

    pub fn with_detail(mood: Mood, detail: impl Into<String>) -> Self {
        Self {
            mood,
            detail: Some(detail.into()),
        }
    }
}
