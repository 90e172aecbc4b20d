//! # Glint UI
//!
//! A minimal set of stateless Dioxus components. Every component is a
//! pure function from its props to an [`Element`](dioxus::prelude::Element):
//! no internal state, no validation, no side effects beyond the rendered
//! output, so rendering twice with identical props yields identical output.
//!
//! The crate root is the aggregation point and the published interface.
//! A component becomes part of the public API by being re-exported here;
//! this is the only coupling between an internal module and an external
//! consumer.
//!
//! ## Example
//!
//! ```rust
//! use dioxus::prelude::*;
//! use glint_ui::{Button, Input};
//!
//! fn form() -> Element {
//!     rsx! {
//!         Input {
//!             label: "Email",
//!             r#type: "email",
//!             placeholder: "you@example.com",
//!         }
//!         Button { onclick: move |_| {}, "Submit" }
//!     }
//! }
//! ```

pub mod components;

pub use components::button::{Button, ButtonProps};
pub use components::input::{Input, InputProps};
