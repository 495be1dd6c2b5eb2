//! Mission, vision, and highlight panels

use dioxus::prelude::*;

/// Generic bilingual content panel: Khmer heading and body with the
/// English rendering underneath.
#[component]
pub fn ValuePanel(
    heading_km: String,
    heading_en: String,
    body_km: String,
    body_en: String,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        div { class: "bg-white rounded-2xl shadow-sm border border-slate-100 p-8",
            if let Some(icon) = icon {
                div { class: "mb-4 w-12 h-12 rounded-xl bg-sky-50 text-sky-600 flex items-center justify-center",
                    {icon}
                }
            }
            h3 { class: "text-2xl font-bold text-slate-800 mb-1", "{heading_km}" }
            p { class: "text-lg font-semibold text-sky-700 mb-4", "{heading_en}" }
            p { class: "text-slate-600 leading-relaxed mb-2", "{body_km}" }
            p { class: "text-slate-400 text-sm leading-relaxed", "{body_en}" }
        }
    }
}

/// Mission panel with the utility's fixed mission copy.
#[component]
pub fn MissionPanel() -> Element {
    rsx! {
        ValuePanel {
            heading_km: "បេសកកម្មរបស់យើង",
            heading_en: "Our Mission",
            body_km: "ផ្គត់ផ្គង់ទឹកស្អាត ដែលមានសុវត្ថិភាព និងគុណភាពខ្ពស់ ជូនប្រជាពលរដ្ឋគ្រប់រូប ក្នុងតម្លៃសមរម្យ ដោយសេវាកម្មទៀងទាត់ និងអាចទុកចិត្តបាន។",
            body_en: "To supply safe, high-quality clean water to every resident at a fair price, through dependable round-the-clock service.",
        }
    }
}

/// Vision panel with the utility's fixed vision copy.
#[component]
pub fn VisionPanel() -> Element {
    rsx! {
        ValuePanel {
            heading_km: "ចក្ខុវិស័យរបស់យើង",
            heading_en: "Our Vision",
            body_km: "ក្លាយជាស្ថាប័នផ្គត់ផ្គង់ទឹកស្អាតឈានមុខគេ ដែលគ្រប់គ្រួសារអាចទទួលបានទឹកស្អាតដល់ផ្ទះ ដោយនិរន្តរភាព និងការទទួលខុសត្រូវចំពោះបរិស្ថាន។",
            body_en: "To be a leading water utility where every household has sustainable access to clean water, delivered with care for the environment.",
        }
    }
}

/// Compact highlight card for the home page service grid.
#[component]
pub fn HighlightCard(
    icon: Element,
    title_km: String,
    title_en: String,
    description: String,
) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl shadow-sm border border-slate-100 p-6 text-center",
            div { class: "mx-auto mb-3 w-11 h-11 rounded-full bg-sky-50 text-sky-600 flex items-center justify-center",
                {icon}
            }
            h4 { class: "text-lg font-semibold text-slate-800", "{title_km}" }
            p { class: "text-sm font-medium text-sky-700 mb-2", "{title_en}" }
            p { class: "text-sm text-slate-500", "{description}" }
        }
    }
}
