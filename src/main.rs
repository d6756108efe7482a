//! arabic-letters-tts CLI entry point.

use anyhow::{Context, Result};
use arabic_letters_tts::backend::{BackendSettings, create_adapter, create_edge_backend};
use arabic_letters_tts::cli::Args;
use arabic_letters_tts::engine::{Generator, RunConfig, RunSummary};
use clap::Parser;

fn main() -> Result<()> {
    // Credentials may live in a .env file next to the working directory
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    if args.list_voices {
        return list_voices(&args.backend_settings());
    }

    let config = args.run_config();
    let adapter = create_adapter(config.backend, &args.backend_settings())
        .with_context(|| format!("Failed to set up {} backend", config.backend.name()))?;

    log::info!(
        "Generating letters with {} ({}) into {}",
        config.backend.name(),
        config.backend.as_str(),
        config.outdir.display()
    );

    let generator = Generator::new(adapter, config);
    let summary = generator.run()?;
    report(generator.config(), &summary);

    Ok(())
}

fn list_voices(settings: &BackendSettings) -> Result<()> {
    let backend = create_edge_backend(settings).context("Failed to set up edge backend")?;
    let voices = backend.list_voices().context("Failed to list voices")?;

    let arabic: Vec<_> = voices.into_iter().filter(|v| v.is_arabic()).collect();
    if arabic.is_empty() {
        println!("No Arabic voices found.");
        return Ok(());
    }

    println!("Available Arabic voices:");
    for voice in arabic {
        println!("  {} ({}, {})", voice.short_name, voice.locale, voice.gender);
    }

    Ok(())
}

fn report(config: &RunConfig, summary: &RunSummary) {
    if !summary.copy_failures.is_empty() {
        log::warn!("{} ASCII copies failed", summary.copy_failures.len());
    }

    if let Some(archive) = &summary.archive {
        println!("ZIP created: {}", archive.path.display());
    }

    println!("Done. Files in: {}", config.outdir.display());
    println!("Index file: {}", summary.index_path.display());
    log::info!(
        "{} letters in {:.1}s",
        summary.records.len(),
        summary.elapsed().num_milliseconds() as f64 / 1000.0
    );
}
