//! Rendering options accepted by the generation service, with the fixed
//! enumerated sets the remote supports.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    #[default]
    Square,
    Portrait2x3,
    Landscape3x2,
    Portrait3x4,
    Landscape4x3,
    Portrait4x5,
    Landscape5x4,
    Phone9x16,
    Wide16x9,
    UltraWide21x9,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 10] = [
        AspectRatio::Square,
        AspectRatio::Portrait2x3,
        AspectRatio::Landscape3x2,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait4x5,
        AspectRatio::Landscape5x4,
        AspectRatio::Phone9x16,
        AspectRatio::Wide16x9,
        AspectRatio::UltraWide21x9,
    ];

    /// Wire value sent to the remote service.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Landscape5x4 => "5:4",
            AspectRatio::Phone9x16 => "9:16",
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::UltraWide21x9 => "21:9",
        }
    }

    /// Picker label shown to the caller's UI.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1 (正方形)",
            AspectRatio::Portrait2x3 => "2:3 (竖版)",
            AspectRatio::Landscape3x2 => "3:2 (横版)",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Landscape5x4 => "5:4",
            AspectRatio::Phone9x16 => "9:16 (手机竖屏)",
            AspectRatio::Wide16x9 => "16:9 (宽屏)",
            AspectRatio::UltraWide21x9 => "21:9 (超宽屏)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    OneK,
    TwoK,
    FourK,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::OneK, Resolution::TwoK, Resolution::FourK];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::OneK => "1K",
            Resolution::TwoK => "2K",
            Resolution::FourK => "4K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpg,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Png, OutputFormat::Jpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
        }
    }
}

/// Per-submission rendering options. `poll_interval`/`timeout` override the
/// client defaults for a single `run`.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
    pub output_format: OutputFormat,
    /// Optional reference images passed through to the remote model.
    pub image_input: Vec<String>,
    /// Optional completion-callback address registered with the remote job.
    pub callback_url: Option<String>,
    pub poll_interval: Option<Duration>,
    pub timeout: Option<Duration>,
}
