//! Box-shadow tokens.

use serde::Serialize;

/// Elevation shadows merged into the framework's `boxShadow` scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShadowTokens {
    /// Resting card elevation, referenced by `shadow-card`.
    pub card: &'static str,
    /// Hovered card elevation, referenced by `shadow-card-hover`.
    #[serde(rename = "card-hover")]
    pub card_hover: &'static str,
    /// Primary button glow, tinted with the brand green.
    pub button: &'static str,
}

/// Box-shadow token table.
pub const SHADOWS: ShadowTokens = ShadowTokens {
    card: "0 4px 20px -4px rgba(0, 0, 0, 0.1)",
    card_hover: "0 8px 30px -4px rgba(0, 0, 0, 0.15)",
    button: "0 2px 8px -2px rgba(40, 148, 72, 0.3)",
};

/// Resolves a shadow token by its serialized name.
pub fn shadow_token(name: &str) -> Option<&'static str> {
    match name {
        "card" => Some(SHADOWS.card),
        "card-hover" => Some(SHADOWS.card_hover),
        "button" => Some(SHADOWS.button),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_total_over_the_table() {
        assert_eq!(shadow_token("card"), Some(SHADOWS.card));
        assert_eq!(shadow_token("card-hover"), Some(SHADOWS.card_hover));
        assert_eq!(shadow_token("button"), Some(SHADOWS.button));
        assert_eq!(shadow_token("modal"), None);
    }

    #[test]
    fn hover_elevation_is_stronger_than_resting() {
        // Both card shadows share the blur/offset grammar; the hover value
        // must read as the larger elevation.
        assert!(SHADOWS.card.starts_with("0 4px"));
        assert!(SHADOWS.card_hover.starts_with("0 8px"));
    }
}
