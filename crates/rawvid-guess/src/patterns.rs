//! Compiled pattern tables used by the guessers.
//!
//! All regular expressions are compiled once into a [`GuessPatterns`] and
//! only read afterwards. [`GuessPatterns::global()`] returns a shared
//! instance; the `*_with` guess functions accept any instance.
//!
//! Patterns run against lower-cased names, so they are written in lower
//! case only.

use rawvid_core::{AlphaMode, ChannelOrder, Endianness, NamedEnum, PixelFormatRgb, Size, Subsampling};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Field separators around delimited tokens.
const DELIM: &str = "[_.-]";

/// Dimension rules, most detailed first. Captures: width, height, then
/// optionally frame rate and bit depth.
const DIMENSION_PATTERNS: [&str; 3] = [
    r"([0-9]+)(?:x|\*)([0-9]+)_([0-9]+)(?:hz)?_([0-9]+)b?[._]",
    r"([0-9]+)(?:x|\*)([0-9]+)_([0-9]+)(?:hz)?[._]",
    r"([0-9]+)(?:x|\*)([0-9]+)[._]",
];

/// RGB bit depth tokens. `64` and `48` count bits per pixel, not per channel.
const RGB_DEPTH_TOKENS: [(&str, u32); 7] = [
    ("", 8),
    ("8", 8),
    ("10", 10),
    ("12", 12),
    ("16", 16),
    ("64", 16),
    ("48", 16),
];

const RGB_ENDIAN_TOKENS: [(&str, Endianness); 3] = [
    ("", Endianness::Little),
    ("le", Endianness::Little),
    ("be", Endianness::Big),
];

/// Regex tables for frame geometry, YUV and RGB guessing.
///
/// Construction compiles every table; reuse one instance (or
/// [`global()`](GuessPatterns::global)) across calls.
#[derive(Debug, Clone)]
pub struct GuessPatterns {
    /// `WxH[_rate[_depth]]` rules in priority order.
    pub(crate) dimensions: [Regex; 3],
    /// `1080pNN` / `720pNN` with their implied size.
    pub(crate) resolution_rates: [(Regex, Size); 2],
    /// `NNfps` / `NNhz`.
    pub(crate) frame_rate: Regex,
    /// `NNbit` then delimited `NNb`.
    pub(crate) bit_depth: [Regex; 2],
    /// Delimited `packed`.
    pub(crate) packed: Regex,
    /// Delimited subsampling name (`_420_`).
    pub(crate) subsampling: Regex,
    /// Delimited `v210`.
    pub(crate) v210: Regex,
    /// Delimited RGB format token (`_rgba16be_`).
    pub(crate) rgb_format: Regex,
    /// RGB format token -> format.
    pub(crate) rgb_tokens: HashMap<String, PixelFormatRgb>,
    /// Delimited `packed` / `planar`.
    pub(crate) rgb_layout: Regex,
}

impl GuessPatterns {
    /// Compiles all tables.
    pub fn new() -> Self {
        let subsampling_names: Vec<_> = Subsampling::names().collect();
        let rgb_tokens = rgb_format_tokens();
        let rgb_alternation = rgb_tokens
            .iter()
            .map(|(token, _)| token.as_str())
            .collect::<Vec<_>>()
            .join("|");

        Self {
            dimensions: DIMENSION_PATTERNS.map(compile),
            resolution_rates: [
                (compile("1080p([0-9]+)"), Size::new(1920, 1080)),
                (compile("720p([0-9]+)"), Size::new(1280, 720)),
            ],
            frame_rate: compile("([0-9]+)(?:fps|hz)"),
            bit_depth: [
                compile("(8|9|10|12|16)-?bit"),
                compile(&delimited("(8|9|10|12|16)b")),
            ],
            packed: compile(&delimited("packed")),
            subsampling: compile(&delimited(&format!("({})", subsampling_names.join("|")))),
            v210: compile(&delimited("v210")),
            rgb_format: compile(&delimited(&format!("({rgb_alternation})"))),
            rgb_tokens: rgb_tokens.into_iter().collect(),
            rgb_layout: compile(&delimited("(packed|planar)")),
        }
    }

    /// Shared instance, compiled on first use.
    pub fn global() -> &'static GuessPatterns {
        static INSTANCE: OnceLock<GuessPatterns> = OnceLock::new();
        INSTANCE.get_or_init(GuessPatterns::new)
    }
}

impl Default for GuessPatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn delimited(inner: &str) -> String {
    format!("{DELIM}{inner}{DELIM}")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

/// Every RGB format token in alternation order: channel order, then alpha
/// placement, then bit depth, then endianness.
fn rgb_format_tokens() -> Vec<(String, PixelFormatRgb)> {
    let mut tokens = Vec::new();
    for order in ChannelOrder::values() {
        let order_name = order.name().to_ascii_lowercase();
        for alpha in [AlphaMode::None, AlphaMode::First, AlphaMode::Last] {
            for (depth_token, bits) in RGB_DEPTH_TOKENS {
                for (endian_token, endianness) in RGB_ENDIAN_TOKENS {
                    let (prefix, suffix) = match alpha {
                        AlphaMode::None => ("", ""),
                        AlphaMode::First => ("a", ""),
                        AlphaMode::Last => ("", "a"),
                    };
                    let token = format!("{prefix}{order_name}{suffix}{depth_token}{endian_token}");
                    let format = PixelFormatRgb::new(order, bits)
                        .with_alpha(alpha)
                        .with_endianness(endianness);
                    tokens.push((token, format));
                }
            }
        }
    }
    tokens
}
