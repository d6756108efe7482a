//! WAV validation for produced clips.

use std::path::Path;

use super::types::BackendError;

/// Format summary of a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Length in frames (samples per channel).
    pub frames: u32,
}

impl WavInfo {
    /// Clip length in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames as f32 / self.sample_rate as f32
    }
}

/// Open `path` as WAV and report its format.
///
/// Fails with [`BackendError::InvalidAudio`] if the file is not decodable.
pub fn inspect_wav(path: &Path) -> Result<WavInfo, BackendError> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| BackendError::InvalidAudio(format!("{}: {e}", path.display())))?;

    let spec = reader.spec();
    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        frames: reader.duration(),
    })
}

/// Remove `output` when `result` is an error.
///
/// A clip that failed to stream, transcode or validate must not stay in the
/// output directory looking like a finished file.
pub fn discard_on_error<T>(
    output: &Path,
    result: Result<T, BackendError>,
) -> Result<T, BackendError> {
    if result.is_err() && output.exists() {
        if let Err(e) = std::fs::remove_file(output) {
            log::warn!("Failed to remove {}: {e}", output.display());
        }
    }
    result
}
