// Prompt engine: template-driven composition, soft validation + stats,
// anchor-based enrichment, and per-backend adaptation.

pub mod composer;
pub mod optimizer;
pub mod templates;
pub mod validator;

pub use composer::{compose, PromptDocument};
pub use optimizer::{adapt_for_model, optimize, OptimizeOptions};
pub use validator::{stats, validate, PromptStats, PromptValidation};
