//! Pill-shaped status label.

use leptos::*;

use crate::class::compose_class;

const BADGE_BASE: &str = "inline-flex items-center font-medium rounded-full";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge color variants.
pub enum BadgeVariant {
    /// Brand-green tinted badge.
    Green,
    /// Cyan tinted badge.
    Cyan,
    /// Red tinted badge.
    Red,
    /// Neutral gray badge.
    Neutral,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Green
    }
}

impl BadgeVariant {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Green => "bg-verdant-green/10 text-verdant-green",
            Self::Cyan => "bg-verdant-cyan/10 text-verdant-cyan",
            Self::Red => "bg-verdant-red/10 text-verdant-red",
            Self::Neutral => "bg-gray-100 text-gray-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge sizes.
pub enum BadgeSize {
    /// Compact badge.
    Sm,
    /// Default badge.
    Md,
}

impl Default for BadgeSize {
    fn default() -> Self {
        Self::Md
    }
}

impl BadgeSize {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-0.5 text-[10px]",
            Self::Md => "px-3 py-1 text-xs",
        }
    }
}

pub(crate) fn badge_class(
    variant: BadgeVariant,
    size: BadgeSize,
    class: Option<&'static str>,
) -> String {
    compose_class(BADGE_BASE, &[variant.class(), size.class()], &[], class)
}

#[component]
/// Shared pill-shaped label for statuses and counts.
pub fn Badge(
    /// Color variant.
    #[prop(default = BadgeVariant::Green)]
    variant: BadgeVariant,
    /// Control size.
    #[prop(default = BadgeSize::Md)]
    size: BadgeSize,
    /// Caller classes appended after the built-in set.
    #[prop(optional)]
    class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant, size, class) id=id title=title>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [BadgeVariant; 4] = [
        BadgeVariant::Green,
        BadgeVariant::Cyan,
        BadgeVariant::Red,
        BadgeVariant::Neutral,
    ];
    const SIZES: [BadgeSize; 2] = [BadgeSize::Sm, BadgeSize::Md];

    #[test]
    fn every_combination_resolves_one_fragment_per_axis() {
        for variant in VARIANTS {
            for size in SIZES {
                let resolved = badge_class(variant, size, None);
                let variant_hits = VARIANTS
                    .iter()
                    .filter(|candidate| resolved.contains(candidate.class()))
                    .count();
                let size_hits = SIZES
                    .iter()
                    .filter(|candidate| resolved.contains(candidate.class()))
                    .count();
                assert_eq!(variant_hits, 1, "variant table leaked into {resolved}");
                assert_eq!(size_hits, 1, "size table leaked into {resolved}");
                assert!(resolved.starts_with(BADGE_BASE));
            }
        }
    }

    #[test]
    fn defaults_are_green_medium() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Green);
        assert_eq!(BadgeSize::default(), BadgeSize::Md);
    }

    #[test]
    fn caller_classes_come_last() {
        let resolved = badge_class(BadgeVariant::Red, BadgeSize::Sm, Some("uppercase"));
        assert!(resolved.ends_with("uppercase"));
    }
}
