//! Neural voice backend (Edge/Azure speech voices).

use std::path::Path;

use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;

use crate::cli::BackendKind;

use super::Synthesizer;
use super::audio::{discard_on_error, inspect_wav};
use super::types::{BackendError, VoiceInfo};

/// Voice used when none is given.
pub const DEFAULT_VOICE: &str = "ar-SA-HamedNeural";

/// Region used when none is given.
pub const DEFAULT_REGION: &str = "eastus";

/// Prosody rate applied to every clip: 10% slower than the voice default.
pub const SPEECH_RATE: &str = "-10%";

/// Audio format requested from the service. RIFF means WAV, no transcode.
pub const OUTPUT_FORMAT: &str = "riff-24khz-16bit-mono-pcm";

const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const USER_AGENT: &str = concat!("arabic-letters-tts/", env!("CARGO_PKG_VERSION"));

/// Async client for the neural voice REST service.
///
/// Each request is driven to completion on a private current-thread runtime,
/// so callers see a plain blocking call and letters stay sequential.
pub struct EdgeBackend {
    base_url: String,
    key: String,
    client: reqwest::Client,
    runtime: Runtime,
}

impl EdgeBackend {
    /// Create a backend for the given subscription key and region.
    pub fn new(key: impl Into<String>, region: &str) -> Result<Self, BackendError> {
        Self::with_base_url(key, &format!("https://{region}.tts.speech.microsoft.com"))
    }

    /// Create a backend against a custom service root.
    pub fn with_base_url(key: impl Into<String>, base_url: &str) -> Result<Self, BackendError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(BackendError::MissingCredentials("AZURE_SPEECH_KEY".to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            key,
            client,
            runtime,
        })
    }

    /// Get the synthesis endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/cognitiveservices/v1", self.base_url)
    }

    /// Get the voice listing URL.
    pub fn voices_url(&self) -> String {
        format!("{}/cognitiveservices/voices/list", self.base_url)
    }

    /// List every voice the service offers.
    pub fn list_voices(&self) -> Result<Vec<VoiceInfo>, BackendError> {
        self.runtime.block_on(self.fetch_voices())
    }

    async fn fetch_voices(&self) -> Result<Vec<VoiceInfo>, BackendError> {
        let response = self
            .client
            .get(self.voices_url())
            .header(KEY_HEADER, &self.key)
            .send()
            .await
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    /// Stream the synthesized audio for `text` into `output`.
    ///
    /// Returns the number of bytes written.
    async fn stream_to_file(
        &self,
        text: &str,
        voice: &str,
        output: &Path,
    ) -> Result<u64, BackendError> {
        let ssml = build_ssml(text, voice);
        log::debug!("POST {} voice={voice} rate={SPEECH_RATE}", self.endpoint());

        let mut response = self
            .client
            .post(self.endpoint())
            .header(KEY_HEADER, &self.key)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .body(ssml)
            .send()
            .await
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed(format!(
                "Status: {status} {}",
                detail.trim()
            )));
        }

        let mut file = tokio::fs::File::create(output).await?;
        let mut written = 0u64;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?
        {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        if written == 0 {
            return Err(BackendError::InvalidResponse(
                "Empty audio stream".to_string(),
            ));
        }

        Ok(written)
    }
}

impl Synthesizer for EdgeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Edge
    }

    fn synthesize(&self, text: &str, output: &Path, voice: &str) -> Result<(), BackendError> {
        let streamed = self
            .runtime
            .block_on(self.stream_to_file(text, voice, output))
            .and_then(|written| Ok((written, inspect_wav(output)?)));
        let (written, info) = discard_on_error(output, streamed)?;

        log::debug!(
            "{} written: {written} bytes, {} Hz, {:.2}s",
            output.display(),
            info.sample_rate,
            info.duration_secs()
        );

        Ok(())
    }
}

/// Locale prefix of a voice name, e.g. `ar-SA` for `ar-SA-HamedNeural`.
pub fn voice_locale(voice: &str) -> &str {
    match voice.match_indices('-').nth(1) {
        Some((idx, _)) => &voice[..idx],
        None => voice,
    }
}

/// SSML document asking `voice` to speak `text` at [`SPEECH_RATE`].
pub fn build_ssml(text: &str, voice: &str) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{lang}'>\
         <voice name='{voice}'><prosody rate='{SPEECH_RATE}'>{text}</prosody></voice></speak>",
        lang = escape_xml(voice_locale(voice)),
        voice = escape_xml(voice),
        text = escape_xml(text),
    )
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
