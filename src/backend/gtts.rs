//! Google Translate TTS backend.

use std::path::{Path, PathBuf};

use crate::cli::BackendKind;

use super::Synthesizer;
use super::audio::{discard_on_error, inspect_wav};
use super::transcode::mp3_to_wav;
use super::types::BackendError;

/// Public endpoint serving MP3 speech for short text.
pub const GTTS_URL: &str = "https://translate.google.com/translate_tts";

/// Language requested from the service.
pub const GTTS_LANG: &str = "ar";

const USER_AGENT: &str = concat!("arabic-letters-tts/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the translate TTS endpoint.
///
/// The service answers in MP3, so every clip goes through the transcoder
/// before it lands at the requested WAV path.
pub struct GttsBackend {
    base_url: String,
    client: reqwest::blocking::Client,
    ffmpeg: PathBuf,
}

impl GttsBackend {
    /// Create a backend against the public endpoint.
    pub fn new(ffmpeg: PathBuf) -> Result<Self, BackendError> {
        Self::with_base_url(GTTS_URL, ffmpeg)
    }

    /// Create a backend against a custom endpoint.
    pub fn with_base_url(base_url: &str, ffmpeg: PathBuf) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
            ffmpeg,
        })
    }

    /// Get the endpoint URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the transcoder binary.
    pub fn ffmpeg(&self) -> &Path {
        &self.ffmpeg
    }

    /// Query parameters for a single request.
    fn query(text: &str) -> Vec<(&'static str, String)> {
        vec![
            ("ie", "UTF-8".to_string()),
            ("q", text.to_string()),
            ("tl", GTTS_LANG.to_string()),
            ("client", "tw-ob".to_string()),
            ("total", "1".to_string()),
            ("idx", "0".to_string()),
            ("textlen", text.chars().count().to_string()),
        ]
    }

    /// Download the MP3 rendition of `text`.
    fn fetch_mp3(&self, text: &str) -> Result<Vec<u8>, BackendError> {
        log::debug!("GET {} for {text}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&Self::query(text))
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let audio = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if audio.is_empty() {
            return Err(BackendError::InvalidResponse(
                "Empty audio response".to_string(),
            ));
        }

        Ok(audio)
    }
}

impl Synthesizer for GttsBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Gtts
    }

    fn synthesize(&self, text: &str, output: &Path, _voice: &str) -> Result<(), BackendError> {
        let mp3 = self.fetch_mp3(text)?;
        let converted = mp3_to_wav(&self.ffmpeg, &mp3, output).and_then(|()| inspect_wav(output));
        let info = discard_on_error(output, converted)?;

        log::debug!(
            "{} written: {} Hz, {} ch, {:.2}s",
            output.display(),
            info.sample_rate,
            info.channels,
            info.duration_secs()
        );

        Ok(())
    }
}
