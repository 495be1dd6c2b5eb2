//! Page container component

use dioxus::prelude::*;

/// Standard page container with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto px-6 py-10", {children} }
    }
}
