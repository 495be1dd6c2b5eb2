//! Status modal component
//!
//! Pure, props-based modal for the submission-success and page-not-found
//! states. The modal never opens itself: the owner passes `is_open` and
//! reacts to `on_dismiss`. While closed it renders nothing at all, so
//! no hidden DOM is left mounted.

use crate::components::icons::{AlertTriangleIcon, CheckIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use dioxus::prelude::*;

/// Visual tone of the modal header icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTone {
    /// Green check for a submitted request
    Success,
    /// Amber warning for a missing page
    NotFound,
}

/// Modal overlay with a title, message, and a single dismiss action.
///
/// Clicking the backdrop or either close control fires `on_dismiss` once.
#[component]
pub fn StatusModal(
    is_open: bool,
    tone: ModalTone,
    title: String,
    message: String,
    dismiss_label: String,
    on_dismiss: EventHandler<()>,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let tone_icon = match tone {
        ModalTone::Success => rsx! {
            div { class: "mx-auto mb-4 w-14 h-14 rounded-full bg-green-100 text-green-600 flex items-center justify-center",
                CheckIcon { class: "w-7 h-7" }
            }
        },
        ModalTone::NotFound => rsx! {
            div { class: "mx-auto mb-4 w-14 h-14 rounded-full bg-amber-100 text-amber-600 flex items-center justify-center",
                AlertTriangleIcon { class: "w-7 h-7" }
            }
        },
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-[3000]",
            onclick: move |_| on_dismiss.call(()),

            div {
                class: "bg-white rounded-2xl shadow-xl p-8 max-w-md w-full mx-4 text-center",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "flex justify-end",
                    ChromelessButton {
                        class: Some("text-slate-400 hover:text-slate-600".to_string()),
                        aria_label: Some("Close".to_string()),
                        onclick: move |_| on_dismiss.call(()),
                        XIcon { class: "w-5 h-5" }
                    }
                }

                {tone_icon}

                h2 { class: "text-xl font-bold text-slate-800 mb-2", "{title}" }
                p { class: "text-slate-500 mb-6", "{message}" }

                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    class: Some("mx-auto".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    "{dismiss_label}"
                }
            }
        }
    }
}
