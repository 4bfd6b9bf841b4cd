//! Labeled form field with icon slots and error/helper messaging.

use leptos::*;

use crate::class::{bool_token, compose_class};
use crate::id::next_field_id;

const INPUT_BASE: &str = "w-full px-4 py-3 text-base text-gray-900 bg-white border rounded-md \
     transition-all duration-150 placeholder:text-gray-400 focus:outline-none focus:ring-2 \
     focus:ring-verdant-green/20 focus:border-verdant-green disabled:bg-gray-100 \
     disabled:cursor-not-allowed";

const BORDER_DEFAULT: &str = "border-gray-300";
const BORDER_ERROR: &str = "border-error focus:ring-error/20 focus:border-error";

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-700";
const ICON_LEFT_WRAP: &str = "absolute left-4 top-1/2 -translate-y-1/2 text-gray-400";
const ICON_RIGHT_WRAP: &str = "absolute right-4 top-1/2 -translate-y-1/2 text-gray-400";
const MESSAGE_ERROR_CLASS: &str = "mt-2 text-sm text-error";
const MESSAGE_HELPER_CLASS: &str = "mt-2 text-sm text-gray-500";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldMessage {
    Error,
    Helper,
    None,
}

/// Picks the message line for one render. A non-empty error always wins;
/// helper text only shows when no error is present.
pub(crate) fn message_state(error: Option<&str>, helper_text: Option<&str>) -> FieldMessage {
    if error.is_some_and(|message| !message.is_empty()) {
        FieldMessage::Error
    } else if helper_text.is_some_and(|message| !message.is_empty()) {
        FieldMessage::Helper
    } else {
        FieldMessage::None
    }
}

/// Id of the message element the field references, when one is displayed.
pub(crate) fn described_by(field_id: &str, message: FieldMessage) -> Option<String> {
    match message {
        FieldMessage::Error => Some(format!("{field_id}-error")),
        FieldMessage::Helper => Some(format!("{field_id}-helper")),
        FieldMessage::None => None,
    }
}

pub(crate) fn input_class(
    has_error: bool,
    has_left_icon: bool,
    has_right_icon: bool,
    class: Option<&'static str>,
) -> String {
    let border_palette = if has_error { BORDER_ERROR } else { BORDER_DEFAULT };
    compose_class(
        INPUT_BASE,
        &[border_palette],
        &[(has_left_icon, "pl-11"), (has_right_icon, "pr-11")],
        class,
    )
}

#[component]
/// Shared labeled text field with icon slots and validation messaging.
pub fn Input(
    /// Visible label bound to the field id.
    #[prop(optional, into)]
    label: Option<String>,
    /// Error message. A non-empty error switches the field to the error
    /// palette and suppresses `helper_text`.
    #[prop(optional, into)]
    error: Option<String>,
    /// Supporting copy shown under the field while no error is present.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Renderable content overlaid on the leading edge of the field.
    #[prop(optional, into)]
    left_icon: Option<ViewFn>,
    /// Renderable content overlaid on the trailing edge of the field.
    #[prop(optional, into)]
    right_icon: Option<ViewFn>,
    /// Caller classes appended after the built-in set.
    #[prop(optional)]
    class: Option<&'static str>,
    /// Field id. Generated from the process-wide source when absent.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let field_id = id.unwrap_or_else(next_field_id);
    let message = message_state(error.as_deref(), helper_text.as_deref());
    let has_error = message == FieldMessage::Error;
    let resolved_class = input_class(has_error, left_icon.is_some(), right_icon.is_some(), class);
    let description_id = described_by(&field_id, message);

    let label_view = label.map(|label| {
        let for_id = field_id.clone();
        view! {
            <label for=for_id class=LABEL_CLASS>
                {label}
            </label>
        }
    });

    let message_view = match message {
        FieldMessage::Error => error.map(|error| {
            let message_id = format!("{field_id}-error");
            view! {
                <p id=message_id class=MESSAGE_ERROR_CLASS>
                    {error}
                </p>
            }
        }),
        FieldMessage::Helper => helper_text.map(|helper_text| {
            let message_id = format!("{field_id}-helper");
            view! {
                <p id=message_id class=MESSAGE_HELPER_CLASS>
                    {helper_text}
                </p>
            }
        }),
        FieldMessage::None => None,
    };

    view! {
        <div class="w-full">
            {label_view}
            <div class="relative">
                {left_icon.map(|icon| view! { <div class=ICON_LEFT_WRAP>{icon.run()}</div> })}
                <input
                    id=field_id
                    type=input_type
                    name=name
                    placeholder=placeholder
                    value=value
                    disabled=disabled
                    required=required
                    autocomplete=autocomplete
                    class=resolved_class
                    aria-invalid=bool_token(has_error)
                    aria-describedby=description_id
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                />
                {right_icon.map(|icon| view! { <div class=ICON_RIGHT_WRAP>{icon.run()}</div> })}
            </div>
            {message_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_over_helper_text() {
        let message = message_state(Some("Invalid email"), Some("We never share your email"));
        assert_eq!(message, FieldMessage::Error);
        assert_eq!(
            described_by("field-7", message),
            Some("field-7-error".to_string())
        );
    }

    #[test]
    fn helper_text_shows_without_an_error() {
        let message = message_state(None, Some("We never share your email"));
        assert_eq!(message, FieldMessage::Helper);
        assert_eq!(
            described_by("field-7", message),
            Some("field-7-helper".to_string())
        );
    }

    #[test]
    fn no_messages_means_no_description_reference() {
        let message = message_state(None, None);
        assert_eq!(message, FieldMessage::None);
        assert_eq!(described_by("field-7", message), None);
    }

    #[test]
    fn empty_error_string_behaves_as_absent() {
        assert_eq!(message_state(Some(""), Some("hint")), FieldMessage::Helper);
        assert_eq!(message_state(Some(""), None), FieldMessage::None);
        assert_eq!(message_state(Some(""), Some("")), FieldMessage::None);
    }

    #[test]
    fn error_switches_the_border_palette() {
        let errored = input_class(true, false, false, None);
        let clean = input_class(false, false, false, None);
        assert!(errored.contains("border-error"));
        assert!(!errored.contains(BORDER_DEFAULT));
        assert!(clean.contains(BORDER_DEFAULT));
        assert!(!clean.contains("border-error"));
    }

    #[test]
    fn icons_reserve_padding_independently() {
        let both = input_class(false, true, true, None);
        let left_only = input_class(false, true, false, None);
        let right_only = input_class(false, false, true, None);
        let neither = input_class(false, false, false, None);

        assert!(both.contains("pl-11") && both.contains("pr-11"));
        assert!(left_only.contains("pl-11") && !left_only.contains("pr-11"));
        assert!(!right_only.contains("pl-11") && right_only.contains("pr-11"));
        assert!(!neither.contains("pl-11") && !neither.contains("pr-11"));
    }

    #[test]
    fn caller_classes_come_last() {
        let resolved = input_class(true, true, true, Some("font-mono"));
        assert!(resolved.ends_with("font-mono"));
    }
}
