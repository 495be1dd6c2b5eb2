use crate::Route;
use dioxus::prelude::*;
use tonle_ui::{ModalTone, PageContainer, StatusModal};

/// Catch-all route. The modal is always open here; dismissing it leaves
/// the route, which closes the modal with it.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        PageContainer {
            div { class: "py-24 text-center",
                p { class: "text-sm text-slate-400 font-mono", "/{path}" }
            }
            StatusModal {
                is_open: true,
                tone: ModalTone::NotFound,
                title: "រកមិនឃើញទំព័រ",
                message: "ទំព័រដែលអ្នកកំពុងស្វែងរកមិនមានទេ។ The page you are looking for does not exist.",
                dismiss_label: "ទៅទំព័រដើម / Go home",
                on_dismiss: move |_| {
                    navigator().push(Route::Home {});
                },
            }
        }
    }
}
