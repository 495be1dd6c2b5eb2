//! Page header component

use dioxus::prelude::*;

/// Centered page header with bilingual title and optional subtitle.
#[component]
pub fn PageHeader(
    title_km: String,
    title_en: String,
    #[props(default)] subtitle: Option<String>,
) -> Element {
    rsx! {
        header { class: "text-center mb-10",
            h1 { class: "text-3xl md:text-4xl font-bold text-slate-800 mb-1", "{title_km}" }
            p { class: "text-xl font-semibold text-sky-700", "{title_en}" }
            if let Some(subtitle) = subtitle {
                p { class: "mt-3 text-slate-500 max-w-2xl mx-auto", "{subtitle}" }
            }
        }
    }
}
