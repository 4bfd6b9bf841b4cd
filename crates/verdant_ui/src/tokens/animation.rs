//! Animation timing tokens and their keyframe definitions.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Named animation shorthands merged into the framework's `animation`
/// scale, referenced by `animate-fade-in` and `animate-slide-up`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnimationTokens {
    /// Opacity fade on entry.
    #[serde(rename = "fade-in")]
    pub fade_in: &'static str,
    /// Combined rise-and-fade on entry.
    #[serde(rename = "slide-up")]
    pub slide_up: &'static str,
}

/// Animation token table.
pub const ANIMATIONS: AnimationTokens = AnimationTokens {
    fade_in: "fadeIn 0.5s ease-out",
    slide_up: "slideUp 0.5s ease-out",
};

/// Resolves an animation token by its serialized name.
pub fn animation_token(name: &str) -> Option<&'static str> {
    match name {
        "fade-in" => Some(ANIMATIONS.fade_in),
        "slide-up" => Some(ANIMATIONS.slide_up),
        _ => None,
    }
}

/// One keyframe stop: an offset plus its property declarations.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeStop {
    /// Percentage offset, e.g. `0%`.
    pub offset: &'static str,
    /// `(property, value)` declarations applied at this offset.
    pub declarations: &'static [(&'static str, &'static str)],
}

/// Keyframe definitions backing the animation shorthands, serialized as
/// the framework's nested `keyframes` maps.
#[derive(Debug, Clone, Copy)]
pub struct KeyframeTokens {
    /// Stops for the `fadeIn` keyframe.
    pub fade_in: &'static [KeyframeStop],
    /// Stops for the `slideUp` keyframe.
    pub slide_up: &'static [KeyframeStop],
}

/// Keyframe token table.
pub const KEYFRAMES: KeyframeTokens = KeyframeTokens {
    fade_in: &[
        KeyframeStop {
            offset: "0%",
            declarations: &[("opacity", "0")],
        },
        KeyframeStop {
            offset: "100%",
            declarations: &[("opacity", "1")],
        },
    ],
    slide_up: &[
        KeyframeStop {
            offset: "0%",
            declarations: &[("opacity", "0"), ("transform", "translateY(20px)")],
        },
        KeyframeStop {
            offset: "100%",
            declarations: &[("opacity", "1"), ("transform", "translateY(0)")],
        },
    ],
};

struct Stops(&'static [KeyframeStop]);

struct Declarations(&'static [(&'static str, &'static str)]);

impl Serialize for KeyframeTokens {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("fadeIn", &Stops(self.fade_in))?;
        map.serialize_entry("slideUp", &Stops(self.slide_up))?;
        map.end()
    }
}

impl Serialize for Stops {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for stop in self.0 {
            map.serialize_entry(stop.offset, &Declarations(stop.declarations))?;
        }
        map.end()
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (property, value) in self.0 {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_name_their_keyframes() {
        assert!(ANIMATIONS.fade_in.starts_with("fadeIn "));
        assert!(ANIMATIONS.slide_up.starts_with("slideUp "));
    }

    #[test]
    fn keyframes_serialize_as_nested_offset_maps() {
        let json = serde_json::to_value(KEYFRAMES).unwrap();
        assert_eq!(json["fadeIn"]["0%"]["opacity"], "0");
        assert_eq!(json["fadeIn"]["100%"]["opacity"], "1");
        assert_eq!(json["slideUp"]["0%"]["transform"], "translateY(20px)");
        assert_eq!(json["slideUp"]["100%"]["transform"], "translateY(0)");
    }

    #[test]
    fn lookups_are_total_over_the_table() {
        assert_eq!(animation_token("fade-in"), Some(ANIMATIONS.fade_in));
        assert_eq!(animation_token("slide-up"), Some(ANIMATIONS.slide_up));
        assert_eq!(animation_token("bounce"), None);
    }
}
