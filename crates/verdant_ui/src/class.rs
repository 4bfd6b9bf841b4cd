//! Class-name composition shared by every component.

/// Composes the resolved class string for a component render.
///
/// Fragments join in a fixed order: `base` first, then variant-table
/// lookups, then boolean-gated fragments, then the caller's `class` hook
/// last so caller classes win over built-ins by normal cascade precedence.
/// Empty fragments are dropped rather than emitting doubled spaces.
pub(crate) fn compose_class(
    base: &'static str,
    variants: &[&'static str],
    conditionals: &[(bool, &'static str)],
    class: Option<&'static str>,
) -> String {
    let mut resolved = String::from(base);
    let mut push = |fragment: &str| {
        if !fragment.is_empty() {
            if !resolved.is_empty() {
                resolved.push(' ');
            }
            resolved.push_str(fragment);
        }
    };
    for fragment in variants {
        push(fragment);
    }
    for (enabled, fragment) in conditionals {
        if *enabled {
            push(fragment);
        }
    }
    if let Some(class) = class {
        push(class);
    }
    resolved
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
