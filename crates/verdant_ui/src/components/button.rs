//! Clickable action control with variant, size, and loading composition.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::class::compose_class;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 font-medium \
     rounded-button transition-all duration-200 focus:outline-none focus-visible:ring-2 \
     focus-visible:ring-verdant-green focus-visible:ring-offset-2 disabled:opacity-50 \
     disabled:cursor-not-allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual button variants.
pub enum ButtonVariant {
    /// Filled brand-green call to action.
    Primary,
    /// Outlined button that fills on hover.
    Secondary,
    /// Borderless low-emphasis button.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-verdant-green text-white hover:bg-verdant-green-light \
                 active:bg-verdant-green-dark shadow-button"
            }
            Self::Secondary => {
                "bg-transparent text-verdant-green border-[1.5px] border-verdant-green \
                 hover:bg-verdant-green hover:text-white"
            }
            Self::Ghost => "bg-transparent text-gray-700 hover:bg-gray-100",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizes.
pub enum ButtonSize {
    /// Compact button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-2 text-xs",
            Self::Md => "px-6 py-3 text-sm",
            Self::Lg => "px-8 py-4 text-base",
        }
    }
}

pub(crate) fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    class: Option<&'static str>,
) -> String {
    compose_class(
        BUTTON_BASE,
        &[variant.class(), size.class()],
        &[(full_width, "w-full")],
        class,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeadingContent {
    Spinner,
    LeftIcon,
    Empty,
}

/// Resolves the icon slots for one render: loading replaces the leading
/// slot with the spinner and hides the trailing slot entirely.
pub(crate) fn resolve_slots(
    loading: bool,
    has_left_icon: bool,
    has_right_icon: bool,
) -> (LeadingContent, bool) {
    if loading {
        (LeadingContent::Spinner, false)
    } else if has_left_icon {
        (LeadingContent::LeftIcon, has_right_icon)
    } else {
        (LeadingContent::Empty, has_right_icon)
    }
}

pub(crate) fn effective_disabled(disabled: bool, loading: bool) -> bool {
    disabled || loading
}

fn spinner() -> View {
    view! {
        <svg
            class="animate-spin h-4 w-4"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
    .into_view()
}

#[component]
/// Shared action button with standardized states and icon slots.
pub fn Button(
    /// Visual variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Control size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Stretches the button across the available width.
    #[prop(optional)]
    full_width: bool,
    /// Replaces the leading icon with a spinner and force-disables the button.
    #[prop(optional)]
    loading: bool,
    #[prop(optional)] disabled: bool,
    /// Renderable content for the leading icon slot.
    #[prop(optional, into)]
    left_icon: Option<ViewFn>,
    /// Renderable content for the trailing icon slot.
    #[prop(optional, into)]
    right_icon: Option<ViewFn>,
    /// Caller classes appended after the built-in set.
    #[prop(optional)]
    class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let resolved_class = button_class(variant, size, full_width, class);
    let (leading_slot, show_right_icon) = resolve_slots(loading, left_icon.is_some(), right_icon.is_some());

    let leading = match leading_slot {
        LeadingContent::Spinner => Some(spinner()),
        LeadingContent::LeftIcon => left_icon.map(|icon| icon.run()),
        LeadingContent::Empty => None,
    };
    let trailing = if show_right_icon {
        right_icon.map(|icon| icon.run())
    } else {
        None
    };

    view! {
        <button
            type=button_type
            class=resolved_class
            id=id
            aria-label=aria_label
            title=title
            disabled=effective_disabled(disabled, loading)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading}
            {children()}
            {trailing}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [ButtonVariant; 3] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    #[test]
    fn every_combination_resolves_one_fragment_per_axis() {
        for variant in VARIANTS {
            for size in SIZES {
                let resolved = button_class(variant, size, false, None);
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
                assert!(resolved.starts_with(BUTTON_BASE));
            }
        }
    }

    #[test]
    fn full_width_gates_the_width_fragment() {
        let stretched = button_class(ButtonVariant::Primary, ButtonSize::Md, true, None);
        let natural = button_class(ButtonVariant::Primary, ButtonSize::Md, false, None);
        assert!(stretched.contains("w-full"));
        assert!(!natural.contains("w-full"));
    }

    #[test]
    fn caller_classes_come_last() {
        let resolved = button_class(
            ButtonVariant::Secondary,
            ButtonSize::Lg,
            true,
            Some("bg-red-500"),
        );
        assert!(resolved.ends_with("bg-red-500"));
    }

    #[test]
    fn defaults_are_primary_medium() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn loading_replaces_leading_slot_and_hides_trailing() {
        assert_eq!(resolve_slots(true, true, true), (LeadingContent::Spinner, false));
        assert_eq!(resolve_slots(true, false, true), (LeadingContent::Spinner, false));
        assert_eq!(resolve_slots(true, false, false), (LeadingContent::Spinner, false));
    }

    #[test]
    fn idle_renders_caller_icons_in_order() {
        assert_eq!(resolve_slots(false, true, true), (LeadingContent::LeftIcon, true));
        assert_eq!(resolve_slots(false, false, true), (LeadingContent::Empty, true));
        assert_eq!(resolve_slots(false, true, false), (LeadingContent::LeftIcon, false));
        assert_eq!(resolve_slots(false, false, false), (LeadingContent::Empty, false));
    }

    #[test]
    fn loading_forces_disabled() {
        assert!(effective_disabled(false, true));
        assert!(effective_disabled(true, false));
        assert!(effective_disabled(true, true));
        assert!(!effective_disabled(false, false));
    }
}
