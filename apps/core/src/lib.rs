//! Core engine for bilingual children's literacy-poster generation.
//!
//! Three components, dependency order leaves-first:
//! - [`vocabulary`] resolves free-text scene themes to curated bilingual
//!   term sets through multi-stage fallback matching;
//! - [`prompt`] composes, validates, measures, and adapts the structured
//!   poster prompt built from a resolved vocabulary;
//! - [`client`] submits the finished prompt to the asynchronous remote
//!   generation service and tracks the job to a terminal state.
//!
//! Data flows one way: theme text → vocabulary set → prompt text → image
//! URLs. The interactive wizard, styling, and download helpers around this
//! crate are the caller's concern.

pub mod client;
pub mod config;
pub mod errors;
pub mod prompt;
pub mod vocabulary;

pub use client::options::{AspectRatio, GenerationOptions, OutputFormat, Resolution};
pub use client::progress::Progress;
pub use client::task::{GenerationTask, TaskState};
pub use client::GenerationClient;
pub use config::Config;
pub use errors::{Error, Result};
pub use prompt::{compose, PromptDocument};
pub use vocabulary::{VocabularyEntry, VocabularyEntrySet, VocabularyResolver};
