use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use glint_ui::{Button, Input};

/// Baseline styling for the class names the gallery hands to the
/// components. The library itself ships no styles; every rule here
/// targets a class passed through `input_class`, `label_class`, or
/// the Button pass-through bag.
const GALLERY_HEAD: &str = r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
    body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; }
    .wrap { display: flex; flex-direction: column; gap: 4px; font-size: 14px; color: #334155; }
    .field { padding: 6px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; }
    .primary { padding: 8px 16px; border: none; border-radius: 6px; background: #2563eb; color: #fff; cursor: pointer; }
    .primary:hover { background: #1d4ed8; }
</style>"#;

#[derive(Debug)]
pub struct GalleryApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for GalleryApp {
    fn default() -> Self {
        Self { title: "Glint Gallery".to_owned(), width: 960.0, height: 640.0 }
    }
}

impl GalleryApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The entry point for launching the gallery window
    pub fn launch(self, root: fn() -> Element) {
        let Self { title, width, height } = self;

        let window =
            WindowBuilder::new().with_title(title).with_inner_size(LogicalSize { width, height });

        let cfg =
            Config::default().with_window(window).with_custom_head(GALLERY_HEAD.to_owned());

        LaunchBuilder::desktop().with_cfg(cfg).launch(root);
    }
}

/// Root view: one of everything the library exports.
pub fn app() -> Element {
    let mut clicks = use_signal(|| 0_u32);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; padding: 24px; max-width: 360px;",
            h1 { "Glint gallery" }
            Input {
                label: "Email",
                r#type: "email",
                placeholder: "you@example.com",
                input_class: "field",
                label_class: "wrap",
            }
            Input {
                placeholder: "No label, pass-through only",
                title: "unlabeled input",
            }
            Button {
                class: "primary",
                onclick: move |_| {
                    clicks += 1;
                    tracing::info!(count = clicks(), "button activated");
                },
                "Clicked {clicks} times"
            }
        }
    }
}
