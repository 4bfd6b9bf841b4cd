//! Border-radius tokens.

use serde::Serialize;

/// Corner radii merged into the framework's `borderRadius` scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadiusTokens {
    /// Card container rounding, referenced by `rounded-card`.
    pub card: &'static str,
    /// Button rounding, referenced by `rounded-button`.
    pub button: &'static str,
}

/// Border-radius token table.
pub const RADII: RadiusTokens = RadiusTokens {
    card: "0.75rem",
    button: "0.5rem",
};

/// Resolves a radius token by its serialized name.
pub fn radius_token(name: &str) -> Option<&'static str> {
    match name {
        "card" => Some(RADII.card),
        "button" => Some(RADII.button),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_total_over_the_table() {
        assert_eq!(radius_token("card"), Some("0.75rem"));
        assert_eq!(radius_token("button"), Some("0.5rem"));
        assert_eq!(radius_token("pill"), None);
    }
}
