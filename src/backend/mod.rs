//! Speech synthesis backends.
//!
//! Provides the [`Synthesizer`] trait and the two services it is implemented
//! for: the Google Translate TTS endpoint (MP3, transcoded locally) and the
//! neural voice service (WAV natively).

mod audio;
mod edge;
mod gtts;
mod transcode;
mod types;

pub use audio::{WavInfo, inspect_wav};
pub use edge::{
    DEFAULT_REGION, DEFAULT_VOICE, EdgeBackend, OUTPUT_FORMAT, SPEECH_RATE, build_ssml,
    voice_locale,
};
pub use gtts::{GTTS_LANG, GTTS_URL, GttsBackend};
pub use transcode::{DEFAULT_FFMPEG, mp3_to_wav};
pub use types::{BackendError, SynthesisError, VoiceInfo};

use std::path::{Path, PathBuf};

use crate::cli::BackendKind;

/// Trait for turning one letter into a WAV file.
///
/// This abstracts the network services, allowing for mock implementations
/// in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Synthesizer: Send + Sync {
    /// Which service this is.
    fn kind(&self) -> BackendKind;

    /// Synthesize `text` into a WAV file at `output`.
    ///
    /// # Arguments
    /// * `text` - A single letter
    /// * `output` - Destination path inside an existing directory
    /// * `voice` - Voice identifier; ignored by backends without voices
    fn synthesize(&self, text: &str, output: &Path, voice: &str) -> Result<(), BackendError>;
}

/// Settings needed to construct either backend.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Subscription key for the neural voice service.
    pub speech_key: Option<String>,
    /// Region of the neural voice service.
    pub speech_region: String,
    /// Transcoder used by the translate backend.
    pub ffmpeg: PathBuf,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            speech_key: None,
            speech_region: DEFAULT_REGION.to_string(),
            ffmpeg: PathBuf::from(DEFAULT_FFMPEG),
        }
    }
}

/// The backend selected for a run.
pub enum SynthesisAdapter {
    Gtts(GttsBackend),
    Edge(EdgeBackend),
}

impl Synthesizer for SynthesisAdapter {
    fn kind(&self) -> BackendKind {
        match self {
            SynthesisAdapter::Gtts(backend) => backend.kind(),
            SynthesisAdapter::Edge(backend) => backend.kind(),
        }
    }

    fn synthesize(&self, text: &str, output: &Path, voice: &str) -> Result<(), BackendError> {
        match self {
            SynthesisAdapter::Gtts(backend) => backend.synthesize(text, output, voice),
            SynthesisAdapter::Edge(backend) => backend.synthesize(text, output, voice),
        }
    }
}

/// Create the neural voice backend, failing if no key is configured.
pub fn create_edge_backend(settings: &BackendSettings) -> Result<EdgeBackend, BackendError> {
    let key = settings
        .speech_key
        .as_deref()
        .ok_or_else(|| BackendError::MissingCredentials("AZURE_SPEECH_KEY".to_string()))?;

    EdgeBackend::new(key, &settings.speech_region)
}

/// Create the backend for the specified kind.
pub fn create_adapter(
    kind: BackendKind,
    settings: &BackendSettings,
) -> Result<SynthesisAdapter, BackendError> {
    match kind {
        BackendKind::Gtts => Ok(SynthesisAdapter::Gtts(GttsBackend::new(
            settings.ffmpeg.clone(),
        )?)),
        BackendKind::Edge => Ok(SynthesisAdapter::Edge(create_edge_backend(settings)?)),
    }
}
