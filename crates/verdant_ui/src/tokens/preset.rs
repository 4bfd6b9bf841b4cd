//! Aggregate theme-extension preset for the styling framework.

use serde::Serialize;

use super::animation::{AnimationTokens, KeyframeTokens, ANIMATIONS, KEYFRAMES};
use super::color::{ColorTokens, COLORS};
use super::radius::{RadiusTokens, RADII};
use super::shadow::{ShadowTokens, SHADOWS};
use super::spacing::{MaxWidthTokens, SpacingTokens, MAX_WIDTH, SPACING};
use super::typography::{FontTokens, FONTS};

/// Token tables grouped under the framework's `theme.extend` key. The
/// merge is additive: framework defaults stay available next to these
/// additions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeExtension {
    /// Color table.
    pub colors: ColorTokens,
    /// Font-stack table.
    #[serde(rename = "fontFamily")]
    pub font_family: FontTokens,
    /// Spacing additions.
    pub spacing: SpacingTokens,
    /// Max-width table.
    #[serde(rename = "maxWidth")]
    pub max_width: MaxWidthTokens,
    /// Border-radius table.
    #[serde(rename = "borderRadius")]
    pub border_radius: RadiusTokens,
    /// Box-shadow table.
    #[serde(rename = "boxShadow")]
    pub box_shadow: ShadowTokens,
    /// Animation shorthand table.
    pub animation: AnimationTokens,
    /// Keyframe definitions.
    pub keyframes: KeyframeTokens,
}

/// The `theme` branch of the preset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Theme {
    /// Additive token extension.
    pub extend: ThemeExtension,
}

/// The full framework preset fragment.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    /// Class-driven dark-mode strategy.
    #[serde(rename = "darkMode")]
    pub dark_mode: &'static str,
    /// Theme extension branch.
    pub theme: Theme,
}

/// The merge-ready preset: every token table under `theme.extend`, with
/// class-driven dark mode.
pub const PRESET: Preset = Preset {
    dark_mode: "class",
    theme: Theme {
        extend: ThemeExtension {
            colors: COLORS,
            font_family: FONTS,
            spacing: SPACING,
            max_width: MAX_WIDTH,
            border_radius: RADII,
            box_shadow: SHADOWS,
            animation: ANIMATIONS,
            keyframes: KEYFRAMES,
        },
    },
};

/// Serializes [`PRESET`] to the JSON shape the framework consumes.
pub fn preset_json() -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(PRESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_matches_the_framework_schema() {
        let json = preset_json().unwrap();
        assert_eq!(json["darkMode"], "class");

        let extend = &json["theme"]["extend"];
        let mut keys: Vec<&str> = extend
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "animation",
                "borderRadius",
                "boxShadow",
                "colors",
                "fontFamily",
                "keyframes",
                "maxWidth",
                "spacing",
            ]
        );
    }

    #[test]
    fn extension_values_mirror_the_raw_tables() {
        let json = preset_json().unwrap();
        let extend = &json["theme"]["extend"];

        assert_eq!(extend["colors"]["verdant"]["green"]["DEFAULT"], "#289448");
        assert_eq!(extend["colors"]["verdant"]["blue"]["accent"], "#116dff");
        assert_eq!(extend["colors"]["gray"]["950"], "#080808");
        assert_eq!(extend["colors"]["cloud-dancer"], "#F0EDE5");
        assert_eq!(extend["fontFamily"]["sans"][0], "Inter");
        assert_eq!(extend["spacing"]["section-sm"], "3rem");
        assert_eq!(extend["maxWidth"]["container"], "1280px");
        assert_eq!(extend["borderRadius"]["card"], "0.75rem");
        assert_eq!(extend["boxShadow"]["card-hover"], SHADOWS.card_hover);
        assert_eq!(extend["animation"]["fade-in"], "fadeIn 0.5s ease-out");
        assert_eq!(extend["keyframes"]["slideUp"]["0%"]["opacity"], "0");
    }

    #[test]
    fn optional_shades_never_serialize_as_null() {
        let json = preset_json().unwrap();
        let cyan = &json["theme"]["extend"]["colors"]["verdant"]["cyan"];
        assert!(cyan.get("muted").is_none());
        assert!(cyan.get("accent").is_none());
        assert_eq!(cyan["light"], "#3FC5D6");
    }
}
