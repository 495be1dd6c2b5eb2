//! Home page hero banner

use crate::components::icons::DropletIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Full-width hero banner with bilingual headline and one call to action.
#[component]
pub fn HeroBanner(
    title_km: String,
    title_en: String,
    tagline_km: String,
    tagline_en: String,
    cta_label: String,
    on_cta: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "bg-gradient-to-br from-sky-700 via-sky-600 to-cyan-500 text-white",
            div { class: "container mx-auto px-6 py-24 text-center",
                div { class: "mx-auto mb-6 w-16 h-16 rounded-full bg-white/15 flex items-center justify-center",
                    DropletIcon { class: "w-8 h-8" }
                }
                h1 { class: "text-4xl md:text-5xl font-bold mb-3", "{title_km}" }
                p { class: "text-2xl md:text-3xl font-semibold text-sky-100 mb-6", "{title_en}" }
                p { class: "text-lg text-sky-100/90 mb-1", "{tagline_km}" }
                p { class: "text-base text-sky-100/70 mb-10", "{tagline_en}" }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    class: Some("mx-auto bg-white text-sky-700 hover:bg-sky-50".to_string()),
                    onclick: move |_| on_cta.call(()),
                    "{cta_label}"
                }
            }
        }
    }
}
