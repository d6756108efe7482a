//! CLI argument definitions and parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::backend::{BackendSettings, DEFAULT_FFMPEG, DEFAULT_REGION, DEFAULT_VOICE};
use crate::engine::{DEFAULT_OUTDIR, RunConfig};

/// Generate Arabic letters as WAV files and ZIP them.
#[derive(Parser, Debug)]
#[command(name = "arabic-letters-tts")]
#[command(about = "Generate Arabic letters as WAV files and ZIP them")]
#[command(version)]
pub struct Args {
    /// TTS backend: "gtts" (Google Translate) or "edge" (neural voices, needs a speech key)
    #[arg(short, long, value_enum, default_value = "gtts")]
    pub backend: BackendKind,

    /// Edge voice (male ar-SA-HamedNeural, female ar-EG-SalmaNeural, etc.)
    #[arg(long, default_value = DEFAULT_VOICE)]
    pub voice: String,

    /// Output directory for WAV files
    #[arg(short, long, default_value = DEFAULT_OUTDIR)]
    pub outdir: PathBuf,

    /// Optional zip filename to create
    #[arg(long = "zip", value_name = "FILE")]
    pub zip_name: Option<PathBuf>,

    /// Also write ASCII-named copies (01_alif.wav, etc.)
    #[arg(long)]
    pub ascii_names: bool,

    /// Subscription key for the neural voice service (required by --backend edge)
    #[arg(long, env = "AZURE_SPEECH_KEY", hide_env_values = true)]
    pub speech_key: Option<String>,

    /// Region of the neural voice service
    #[arg(long, env = "AZURE_SPEECH_REGION", default_value = DEFAULT_REGION)]
    pub speech_region: String,

    /// ffmpeg binary used to convert gTTS MP3 output to WAV
    #[arg(long, env = "FFMPEG_BIN", default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: PathBuf,

    /// List the Arabic voices of the edge backend and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Settings for this run.
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            backend: self.backend,
            voice: self.voice.clone(),
            outdir: self.outdir.clone(),
            zip_name: self.zip_name.clone(),
            emit_ascii_copies: self.ascii_names,
        }
    }

    /// Settings needed to construct a backend.
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            speech_key: self.speech_key.clone(),
            speech_region: self.speech_region.clone(),
            ffmpeg: self.ffmpeg.clone(),
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// TTS backend selection.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// Google Translate TTS (MP3, converted locally)
    #[default]
    #[value(name = "gtts", alias = "primary")]
    Gtts,

    /// Neural voice service (WAV natively, 10% slower rate; needs AZURE_SPEECH_KEY)
    #[value(name = "edge", alias = "secondary")]
    Edge,
}

impl BackendKind {
    /// Returns the CLI argument string for this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Gtts => "gtts",
            BackendKind::Edge => "edge",
        }
    }

    /// Returns the tag used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::Gtts => "gTTS",
            BackendKind::Edge => "edge-tts",
        }
    }

    /// Returns the human-readable name of the backend.
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Gtts => "Google Translate TTS",
            BackendKind::Edge => "Edge neural voices",
        }
    }
}
