use crate::Route;
use dioxus::prelude::*;
use tonle_ui::{
    use_scroll_reveal, CheckIcon, ClockIcon, CoinsIcon, HeroBanner, HighlightCard, MissionPanel,
    PageContainer, RevealSection, VisionPanel,
};

/// Sections that animate in as the visitor scrolls.
const SECTIONS: &[&str] = &["mission", "vision", "highlights"];

#[component]
pub fn Home() -> Element {
    let reveal = use_scroll_reveal(SECTIONS);

    rsx! {
        HeroBanner {
            title_km: "ទន្លេ - រដ្ឋាករទឹក",
            title_en: "Tonle Water Supply Authority",
            tagline_km: "ទឹកស្អាត សុវត្ថិភាព សម្រាប់គ្រប់គ្រួសារ",
            tagline_en: "Clean, safe water for every household",
            cta_label: "ស្នើសុំតភ្ជាប់ទឹក / Request a connection",
            on_cta: move |_| {
                navigator().push(Route::Services {});
            },
        }

        PageContainer {
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8 mb-12",
                RevealSection { handle: reveal, section: "mission", MissionPanel {} }
                RevealSection { handle: reveal, section: "vision", VisionPanel {} }
            }

            RevealSection { handle: reveal, section: "highlights",
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    HighlightCard {
                        icon: rsx! { CheckIcon { class: "w-5 h-5" } },
                        title_km: "គុណភាពទឹកខ្ពស់",
                        title_en: "High water quality",
                        description: "Treated and tested daily against national drinking-water standards.",
                    }
                    HighlightCard {
                        icon: rsx! { ClockIcon { class: "w-5 h-5" } },
                        title_km: "ផ្គត់ផ្គង់ ២៤ ម៉ោង",
                        title_en: "24-hour supply",
                        description: "Continuous pressure across the whole distribution network.",
                    }
                    HighlightCard {
                        icon: rsx! { CoinsIcon { class: "w-5 h-5" } },
                        title_km: "តម្លៃសមរម្យ",
                        title_en: "Fair tariffs",
                        description: "Transparent pricing with social tariffs for low-income families.",
                    }
                }
            }
        }
    }
}
