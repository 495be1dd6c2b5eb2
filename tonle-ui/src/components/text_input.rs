//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Smaller padding
    Small,
    /// Standard padding
    Medium,
}

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default = "text")] r#type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2.5 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };

    let base = "w-full bg-white border border-slate-300 rounded-lg focus:outline-none focus:ring-1 focus:ring-sky-500/50 text-slate-700 placeholder-slate-400";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let class = format!("{base} {padding} {disabled_class}");

    rsx! {
        input {
            r#type,
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
