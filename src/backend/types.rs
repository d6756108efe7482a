//! Backend error and response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::BackendKind;

/// Errors that can occur when talking to a speech backend.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing credentials: set {0} or pass --speech-key")]
    MissingCredentials(String),

    #[error("Transcoder not found: {0}")]
    ToolNotFound(String),

    #[error("Transcode failed: {0}")]
    TranscodeFailed(String),

    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A backend failure for one letter.
///
/// Displayed with the backend tag so the failing service and letter are
/// obvious from a single stderr line.
#[derive(Error, Debug)]
#[error("[{}] Failed for {}: {}", .backend.label(), .glyph, .source)]
pub struct SynthesisError {
    pub backend: BackendKind,
    pub glyph: char,
    #[source]
    pub source: BackendError,
}

/// A voice offered by the neural voice service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct VoiceInfo {
    pub name: String,
    pub short_name: String,
    pub gender: String,
    pub locale: String,
}

impl VoiceInfo {
    /// Whether the voice speaks an Arabic locale.
    pub fn is_arabic(&self) -> bool {
        self.locale.starts_with("ar-")
    }
}
