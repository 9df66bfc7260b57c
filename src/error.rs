use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodError {
    #[error("Payload missing ',' delimiter between tag and body")]
    MissingDelimiter,

    #[error("Invalid base64 body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Payload is not an image (detected: {0})")]
    NotAnImage(String),

    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Engine transport error: {0}")]
    Transport(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No image payload supplied")]
    NoInput,
}

pub type Result<T> = std::result::Result<T, MoodError>;
