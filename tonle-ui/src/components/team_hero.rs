//! About page team hero

use dioxus::prelude::*;

/// One headline figure shown under the team hero.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamStat {
    pub value: String,
    pub label_km: String,
    pub label_en: String,
}

/// Banner introducing the utility's team, with headline figures.
#[component]
pub fn TeamHero(
    heading_km: String,
    heading_en: String,
    blurb: String,
    #[props(default)] stats: Vec<TeamStat>,
) -> Element {
    rsx! {
        div { class: "bg-sky-900 text-white rounded-2xl p-10",
            h2 { class: "text-3xl font-bold mb-1", "{heading_km}" }
            p { class: "text-xl font-semibold text-sky-300 mb-4", "{heading_en}" }
            p { class: "text-sky-100/80 max-w-3xl mb-8", "{blurb}" }
            if !stats.is_empty() {
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-6",
                    for stat in stats {
                        div { class: "bg-white/10 rounded-xl p-5 text-center",
                            p { class: "text-3xl font-bold", "{stat.value}" }
                            p { class: "text-sm text-sky-200 mt-1", "{stat.label_km}" }
                            p { class: "text-xs text-sky-300/70", "{stat.label_en}" }
                        }
                    }
                }
            }
        }
    }
}
