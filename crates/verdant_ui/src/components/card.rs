//! Content container with interactive and padding axes.

use leptos::*;

use crate::class::compose_class;

const CARD_BASE: &str = "bg-white rounded-card shadow-card overflow-hidden transition-all duration-200";
const CARD_INTERACTIVE: &str = "hover:shadow-card-hover hover:-translate-y-0.5 cursor-pointer";

// One-sided padding keeps Header+Body+Footer seams from doubling up: the
// header owns only the top edge, the footer only the bottom edge, and the
// body pads all sides.
const CARD_HEADER_BASE: &str = "px-6 pt-6";
const CARD_BODY_BASE: &str = "p-6";
const CARD_FOOTER_BASE: &str = "px-6 pb-6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Internal padding magnitudes for [`Card`].
pub enum CardPadding {
    /// No internal padding, for headers/bodies/footers that pad themselves.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    Md,
    /// Spacious padding.
    Lg,
}

impl Default for CardPadding {
    fn default() -> Self {
        Self::Md
    }
}

impl CardPadding {
    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Sm => "p-4",
            Self::Md => "p-6",
            Self::Lg => "p-8",
        }
    }
}

pub(crate) fn card_class(
    interactive: bool,
    padding: CardPadding,
    class: Option<&'static str>,
) -> String {
    compose_class(
        CARD_BASE,
        &[padding.class()],
        &[(interactive, CARD_INTERACTIVE)],
        class,
    )
}

#[component]
/// Shared content container surface.
pub fn Card(
    /// Adds hover elevation, translate, and cursor affordances.
    #[prop(optional)]
    interactive: bool,
    /// Internal padding magnitude.
    #[prop(default = CardPadding::Md)]
    padding: CardPadding,
    /// Caller classes appended after the built-in set.
    #[prop(optional)]
    class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(interactive, padding, class) id=id>
            {children()}
        </div>
    }
}

#[component]
/// Card header band padding only the top and horizontal edges.
pub fn CardHeader(
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=compose_class(CARD_HEADER_BASE, &[], &[], class)>
            {children()}
        </div>
    }
}

#[component]
/// Card body padding all edges.
pub fn CardBody(
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=compose_class(CARD_BODY_BASE, &[], &[], class)>
            {children()}
        </div>
    }
}

#[component]
/// Card footer band padding only the bottom and horizontal edges.
pub fn CardFooter(
    #[prop(optional)] class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=compose_class(CARD_FOOTER_BASE, &[], &[], class)>
            {children()}
        </div>
    }
}
