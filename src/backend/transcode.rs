//! MP3 to WAV transcoding through an external `ffmpeg` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use super::types::BackendError;

/// Default transcoder binary, looked up on `PATH`.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Transcode `mp3` into a WAV file at `output`.
///
/// The compressed audio is staged in a temporary file that is removed when
/// this function returns, whether or not `ffmpeg` succeeded.
pub fn mp3_to_wav(ffmpeg: &Path, mp3: &[u8], output: &Path) -> Result<(), BackendError> {
    let mut staged = tempfile::Builder::new()
        .prefix("letter-")
        .suffix(".mp3")
        .tempfile()?;
    staged.write_all(mp3)?;
    staged.flush()?;

    let mut cmd = Command::new(ffmpeg);
    cmd.args(["-y", "-hide_banner", "-loglevel", "error", "-i"])
        .arg(staged.path())
        .args(["-f", "wav"])
        .arg(output)
        .stdin(Stdio::null());

    log::debug!("Running {:?}", cmd);
    let result = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BackendError::ToolNotFound(ffmpeg.display().to_string())
        } else {
            BackendError::Io(e)
        }
    })?;

    if !result.status.success() {
        // ffmpeg may leave a truncated file behind
        let _ = std::fs::remove_file(output);
        return Err(BackendError::TranscodeFailed(format!(
            "{} exited with {}: {}",
            ffmpeg.display(),
            result.status,
            String::from_utf8_lossy(&result.stderr).trim()
        )));
    }

    Ok(())
}
