//! arabic-letters-tts: spoken Arabic alphabet generator.
//!
//! This crate synthesizes one WAV clip per letter of the Arabic alphabet
//! through a text-to-speech backend, writes a CSV index of the produced
//! files, and can bundle everything into a ZIP archive.

pub mod backend;
pub mod cli;
pub mod engine;
pub mod index;
pub mod letters;
pub mod package;
