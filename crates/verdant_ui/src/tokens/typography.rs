//! Font-stack tokens.

use serde::Serialize;

/// Ordered font fallback stacks, serialized under the framework's
/// `fontFamily` key.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FontTokens {
    /// General-purpose sans stack.
    pub sans: &'static [&'static str],
    /// Long-form serif stack.
    pub serif: &'static [&'static str],
    /// Heading serif stack.
    pub heading: &'static [&'static str],
    /// Body sans stack.
    pub body: &'static [&'static str],
}

/// Font token table.
pub const FONTS: FontTokens = FontTokens {
    sans: &[
        "Inter",
        "system-ui",
        "-apple-system",
        "BlinkMacSystemFont",
        "\"Segoe UI\"",
        "Roboto",
        "\"Helvetica Neue\"",
        "Helvetica",
        "Arial",
        "\"Noto Sans SC\"",
        "sans-serif",
    ],
    serif: &[
        "\"Source Serif 4\"",
        "ui-serif",
        "Georgia",
        "\"Times New Roman\"",
        "Times",
        "\"Noto Serif SC\"",
        "serif",
    ],
    heading: &["\"Source Serif 4\"", "ui-serif", "Georgia", "serif"],
    body: &["Inter", "system-ui", "-apple-system", "sans-serif"],
};

/// Resolves a font stack by its serialized name.
pub fn font_stack(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "sans" => Some(FONTS.sans),
        "serif" => Some(FONTS.serif),
        "heading" => Some(FONTS.heading),
        "body" => Some(FONTS.body),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stack_ends_in_a_generic_family() {
        for name in ["sans", "serif", "heading", "body"] {
            let stack = font_stack(name).unwrap();
            let last = stack.last().unwrap();
            assert!(
                matches!(*last, "sans-serif" | "serif"),
                "{name} stack ends in {last}"
            );
        }
    }

    #[test]
    fn multiword_families_stay_quoted() {
        assert!(FONTS.sans.contains(&"\"Segoe UI\""));
        assert!(FONTS.serif.contains(&"\"Source Serif 4\""));
    }
}
