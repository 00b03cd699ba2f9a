//! Best-effort prompt enrichment and per-backend adaptation.
//!
//! Every optimization is a targeted substring replacement that silently does
//! nothing when its anchor is absent. Adaptation rewrites the prompt for a
//! specific generation backend; unknown model ids leave it unchanged.

use crate::prompt::templates::{
    LIGHTING_ANCHOR, LIGHTING_ENHANCED, QUALITY_ANCHOR, QUALITY_HIGH_DETAIL, STYLE_ANCHOR,
    STYLE_ENHANCED,
};

/// Independent boolean switches for `optimize`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizeOptions {
    /// Upgrade the quality line to the ultra-high-detail variant.
    pub high_detail: bool,
    /// Append the named-style qualifier to the style line.
    pub enhance_style: bool,
    /// Add cinematic lighting descriptors to the palette line.
    pub enhance_lighting: bool,
}

pub fn optimize(text: &str, options: &OptimizeOptions) -> String {
    let mut optimized = text.to_string();

    if options.high_detail {
        optimized = optimized.replace(QUALITY_ANCHOR, QUALITY_HIGH_DETAIL);
    }
    if options.enhance_style {
        optimized = optimized.replace(STYLE_ANCHOR, STYLE_ENHANCED);
    }
    if options.enhance_lighting {
        optimized = optimized.replace(LIGHTING_ANCHOR, LIGHTING_ENHANCED);
    }

    optimized
}

/// Reformats the prompt for a specific backend. Matching is
/// case-insensitive; unrecognized ids return the text unchanged.
pub fn adapt_for_model(text: &str, model_id: &str) -> String {
    match model_id.to_lowercase().as_str() {
        // native backend, no adjustment needed
        "nano-banana-pro" => text.to_string(),
        "dall-e" => {
            let adapted = match text.strip_prefix("请生成一张") {
                Some(rest) => format!("Generate a {rest}"),
                None => text.to_string(),
            };
            adapted.replacen("竖版 A4", "vertical A4 format", 1)
        }
        "midjourney" => {
            let head: String = text.chars().take(100).collect();
            format!("Children's English learning poster: {head} --style raw --ar 2:3")
        }
        // SD works better with a much shorter prompt; keep the header and
        // scene sections only
        "stable-diffusion" => text.lines().take(20).collect::<Vec<_>>().join("\n"),
        _ => text.to_string(),
    }
}
