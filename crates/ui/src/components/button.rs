//! Button component.

use dioxus::prelude::*;

/// A clickable control that forwards everything it is given.
///
/// The component consumes nothing itself: every pass-through attribute
/// (`disabled`, `class`, `style`, ARIA, ...) is spread verbatim onto the
/// rendered `button`, and the optional `onclick` handler is invoked once
/// per activation by the renderer.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use glint_ui::Button;
/// # fn view() -> Element {
/// rsx! {
///     Button {
///         class: "primary",
///         onclick: move |_| {},
///         "Save"
///     }
/// }
/// # }
/// ```
#[component]
pub fn Button(
    /// Click handler, forwarded to the rendered `button`.
    onclick: Option<EventHandler<MouseEvent>>,
    /// Pass-through attributes, applied verbatim.
    #[props(extends = button, extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        button {
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}
