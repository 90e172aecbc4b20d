//! Rendered-output contracts for the published components.
//!
//! Components are rendered to plain HTML through `dioxus-ssr`, which is
//! enough to pin down the pass-through behavior without owning a renderer.

use dioxus::prelude::*;
use glint_ui::{Button, Input};

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

#[test]
fn button_forwards_attributes_verbatim() {
    let html = render(rsx! {
        Button {
            id: "save",
            class: "btn primary",
            title: "Save the draft",
            "Save"
        }
    });

    assert!(html.contains("<button"), "expected a button element: {html}");
    assert!(html.contains(r#"id="save""#), "id should pass through: {html}");
    assert!(html.contains(r#"class="btn primary""#), "class should pass through: {html}");
    assert!(html.contains(r#"title="Save the draft""#), "title should pass through: {html}");
}

#[test]
fn button_renders_children() {
    let html = render(rsx! {
        Button { "Save" }
    });

    assert!(html.contains("Save"), "children should be rendered: {html}");
}

#[test]
fn button_disabled_state_reaches_output() {
    let html = render(rsx! {
        Button { disabled: true, "Save" }
    });

    assert!(html.contains("disabled"), "disabled should pass through: {html}");
}

#[test]
fn input_label_text_rendered_when_provided() {
    let html = render(rsx! {
        Input { label: "Email" }
    });

    assert!(html.contains("<label"), "expected a label wrapper: {html}");
    assert!(html.contains("Email"), "label text should be rendered: {html}");

    let text = html.find("Email").expect("label text present");
    let input = html.find("<input").expect("input present");
    assert!(text < input, "label text should precede the input: {html}");
}

#[test]
fn input_label_text_absent_when_omitted() {
    let html = render(rsx! {
        Input {}
    });

    assert!(
        html.contains("<label><input"),
        "wrapper should contain no text when label is omitted: {html}"
    );
}

#[test]
fn input_classes_target_label_and_input_exactly() {
    let html = render(rsx! {
        Input { input_class: "field", label_class: "wrap" }
    });

    assert!(html.contains(r#"<label class="wrap""#), "label_class targets the label: {html}");
    assert!(html.contains(r#"<input class="field""#), "input_class targets the input: {html}");
    assert_eq!(html.matches("class=").count(), 2, "no other node gets a class: {html}");
}

#[test]
fn input_type_and_placeholder_forwarded_verbatim() {
    let html = render(rsx! {
        Input { r#type: "email", placeholder: "you@example.com" }
    });

    assert!(html.contains(r#"type="email""#), "type should pass through: {html}");
    assert!(
        html.contains(r#"placeholder="you@example.com""#),
        "placeholder should pass through: {html}"
    );
}

#[test]
fn input_omitted_fields_leave_no_attribute() {
    let html = render(rsx! {
        Input {}
    });

    assert!(!html.contains("type="), "omitted type should render no attribute: {html}");
    assert!(!html.contains("placeholder="), "omitted placeholder should render nothing: {html}");
    assert!(!html.contains("class="), "omitted classes should render nothing: {html}");
}

#[test]
fn input_type_is_not_validated() {
    // Unknown tokens are the rendering target's problem, not ours.
    let html = render(rsx! {
        Input { r#type: "definitely-not-an-input-type" }
    });

    assert!(html.contains(r#"type="definitely-not-an-input-type""#), "{html}");
}

#[test]
fn named_class_wins_over_pass_through() {
    let html = render(rsx! {
        Input { input_class: "field", class: "smuggled" }
    });

    assert!(html.contains(r#"class="field""#), "named field should win: {html}");
    assert!(!html.contains("smuggled"), "conflicting pass-through should be dropped: {html}");
}

#[test]
fn pass_through_class_applies_when_named_absent() {
    let html = render(rsx! {
        Input { class: "plain" }
    });

    assert!(html.contains(r#"class="plain""#), "pass-through class should apply: {html}");
}

#[test]
fn rendering_twice_is_identical() {
    let view = || {
        rsx! {
            Input { label: "Name", placeholder: "Ada" }
            Button { class: "primary", "Go" }
        }
    };

    assert_eq!(render(view()), render(view()));
}

#[test]
fn email_scenario() {
    let html = render(rsx! {
        Input {
            label: "Email",
            placeholder: "you@example.com",
            r#type: "email",
            input_class: "field",
            label_class: "wrap",
        }
    });

    assert!(html.contains(r#"<label class="wrap""#), "{html}");
    assert!(html.contains("Email"), "{html}");
    assert!(html.contains(r#"<input class="field""#), "{html}");
    assert!(html.contains(r#"type="email""#), "{html}");
    assert!(html.contains(r#"placeholder="you@example.com""#), "{html}");

    let label = html.find("<label").expect("label present");
    let text = html.find("Email").expect("text present");
    let input = html.find("<input").expect("input present");
    assert!(label < text && text < input, "label wraps text then input: {html}");
}
