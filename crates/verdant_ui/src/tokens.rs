//! Design-token tables: the single source of truth for visual values.
//!
//! Components reference these tokens by name inside their class fragments
//! instead of duplicating literal values, so a token change propagates to
//! every component uniformly. Consuming applications either import the
//! tables directly or merge [`preset::PRESET`] into their styling
//! framework's theme.

pub mod animation;
pub mod color;
pub mod preset;
pub mod radius;
pub mod shadow;
pub mod spacing;
pub mod typography;

pub use animation::{animation_token, AnimationTokens, KeyframeStop, KeyframeTokens, ANIMATIONS, KEYFRAMES};
pub use color::{color_token, BrandColors, ColorFamily, ColorTokens, GrayRamp, COLORS};
pub use preset::{preset_json, Preset, Theme, ThemeExtension, PRESET};
pub use radius::{radius_token, RadiusTokens, RADII};
pub use shadow::{shadow_token, ShadowTokens, SHADOWS};
pub use spacing::{max_width_token, spacing_token, MaxWidthTokens, SpacingTokens, MAX_WIDTH, SPACING};
pub use typography::{font_stack, FontTokens, FONTS};
