//! Labeled input component.

use dioxus::prelude::*;

/// A labeled text-entry control.
///
/// Renders a `label` element wrapping an `input`. The label text is only
/// emitted when `label` is provided; the wrapper itself is always there so
/// the control keeps its click-to-focus association. `label_class` styles
/// the wrapper, `input_class` styles the input, and every remaining
/// pass-through attribute lands on the `input` untouched.
///
/// `r#type` is forwarded verbatim. The component does not check it against
/// the legal input-type tokens; the rendering target owns that concern.
///
/// When a caller supplies both `input_class` and a conflicting
/// pass-through `class`, the named field wins and the pass-through entry
/// is dropped.
#[component]
pub fn Input(
    /// Text content of the wrapping `label` element.
    label: Option<String>,
    /// Forwarded verbatim to the rendered `input`.
    placeholder: Option<String>,
    /// Forwarded verbatim to the rendered `input`, unvalidated.
    r#type: Option<String>,
    /// Class of the `input` element only.
    input_class: Option<String>,
    /// Class of the wrapping `label` element only.
    label_class: Option<String>,
    /// Pass-through attributes, applied verbatim to the `input`.
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    // Named fields win over a conflicting pass-through entry.
    let attributes: Vec<Attribute> = attributes
        .into_iter()
        .filter(|attribute| !(attribute.name == "class" && input_class.is_some()))
        .collect();

    let text = label.map(|text| rsx! { "{text}" });

    rsx! {
        label {
            class: label_class,
            {text}
            input {
                class: input_class,
                r#type,
                placeholder,
                ..attributes,
            }
        }
    }
}
