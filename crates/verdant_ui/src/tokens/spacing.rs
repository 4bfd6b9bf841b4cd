//! Spacing-scale additions and max-width tokens.

use serde::Serialize;

/// Additions merged into the framework's spacing scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpacingTokens {
    /// Vertical rhythm of a full page section.
    pub section: &'static str,
    /// Compact section rhythm.
    #[serde(rename = "section-sm")]
    pub section_sm: &'static str,
}

/// Spacing token table.
pub const SPACING: SpacingTokens = SpacingTokens {
    section: "5rem",
    section_sm: "3rem",
};

/// Content width caps.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaxWidthTokens {
    /// Outer page container width.
    pub container: &'static str,
    /// Reading-measure content width.
    pub content: &'static str,
}

/// Max-width token table.
pub const MAX_WIDTH: MaxWidthTokens = MaxWidthTokens {
    container: "1280px",
    content: "720px",
};

/// Resolves a spacing token by its serialized name.
pub fn spacing_token(name: &str) -> Option<&'static str> {
    match name {
        "section" => Some(SPACING.section),
        "section-sm" => Some(SPACING.section_sm),
        _ => None,
    }
}

/// Resolves a max-width token by its serialized name.
pub fn max_width_token(name: &str) -> Option<&'static str> {
    match name {
        "container" => Some(MAX_WIDTH.container),
        "content" => Some(MAX_WIDTH.content),
        _ => None,
    }
}
