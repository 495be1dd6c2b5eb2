//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type,
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Sky background - for primary actions
    Primary,
    /// Slate background - for secondary/back actions
    Secondary,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-sm
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 text-sm rounded-lg transition-colors",
        ButtonSize::Medium => "inline-flex items-center gap-2 rounded-lg transition-colors",
    };

    let padding = match size {
        ButtonSize::Small => "px-3 py-1.5",
        ButtonSize::Medium => "px-4 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-sky-600 hover:bg-sky-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-slate-200 hover:bg-slate-300 text-slate-700 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => "text-slate-500 hover:text-slate-800 hover:bg-slate-100",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            id,
            disabled,
            loading,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
