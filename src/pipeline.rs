//! One-shot detection pipeline
//!
//! decode → analyze → (neutral only) face check → map → build. Every failure
//! past input parsing is recovered into a Neutral record with a detail
//! string; the caller always gets a well-formed [`MoodResult`]. Failure
//! causes go to the diagnostic channel, never into the stdout record.

use crate::analyzer::FaceAnalyzer;
use crate::decode::decode_data_uri;
use crate::mood::{FaceCheck, Mood, MoodResult};
use image::DynamicImage;
use tracing::{debug, error, warn};

/// Run the full pipeline on one encoded payload.
pub async fn detect_mood(payload: &str, analyzer: &dyn FaceAnalyzer) -> MoodResult {
    let image = match decode_data_uri(payload) {
        Ok(image) => image,
        Err(e) => {
            error!("image decode failed: {e}");
            return MoodResult::with_detail(Mood::Neutral, "Failed to decode image data.");
        }
    };

    let raw = match analyzer.analyze_emotion(&image).await {
        Ok(Some(label)) => label,
        // No face-level result: treated as "neutral" at the raw-label stage,
        // disambiguated by the face check below.
        Ok(None) => "neutral".to_string(),
        Err(e) => {
            error!("emotion analysis failed: {e}");
            "error_analysis".to_string()
        }
    };
    debug!("raw emotion label: {raw}");

    let mood = Mood::from_raw(&raw);
    match raw.as_str() {
        // "neutral" is structurally ambiguous: the engine answers the same
        // token for a calm face and for no detectable face at all.
        "neutral" => {
            let detail = match check_face(analyzer, &image).await {
                FaceCheck::NoFace => "No face detected or expression is neutral.",
                FaceCheck::FaceFound => "Expression detected as neutral.",
                FaceCheck::CheckFailed => "Expression detected as neutral or face detection issue.",
            };
            MoodResult::with_detail(mood, detail)
        }
        "error_analysis" => MoodResult::with_detail(mood, "Error during emotion analysis."),
        _ => MoodResult::new(mood),
    }
}

/// Resolve whether a "neutral" label means a calm face or no face at all.
///
/// A failed extraction is a softer uncertainty than a failed analysis; it
/// degrades the detail string and never aborts the invocation.
async fn check_face(analyzer: &dyn FaceAnalyzer, image: &DynamicImage) -> FaceCheck {
    match analyzer.extract_faces(image).await {
        Ok(faces) if faces.iter().any(|f| f.area() > 0) => FaceCheck::FaceFound,
        Ok(_) => FaceCheck::NoFace,
        Err(e) => {
            warn!("face check failed: {e}");
            FaceCheck::CheckFailed
        }
    }
}
