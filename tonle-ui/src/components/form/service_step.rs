//! Step 2: service details

use super::applicant_step::FieldRow;
use crate::components::{TextInput, TextInputSize};
use chrono::NaiveDate;
use dioxus::prelude::*;
use tonle_common::{ConnectionType, ServiceDetails};

#[component]
pub fn ServiceStep(details: ServiceDetails, on_change: EventHandler<ServiceDetails>) -> Element {
    let kind_base = details.clone();
    let date_base = details.clone();
    let note_base = details.clone();

    let date_value = details
        .preferred_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let selected_slug = details.connection_type.slug();

    rsx! {
        div { class: "space-y-5",
            FieldRow { label_km: "ប្រភេទការតភ្ជាប់", label_en: "Connection type",
                select {
                    class: "w-full bg-white border border-slate-300 rounded-lg px-3 py-2 text-slate-700 focus:outline-none focus:ring-1 focus:ring-sky-500/50",
                    value: "{selected_slug}",
                    onchange: move |e| {
                        if let Some(connection_type) = ConnectionType::from_slug(&e.value()) {
                            on_change.call(ServiceDetails { connection_type, ..kind_base.clone() });
                        }
                    },
                    for kind in ConnectionType::ALL {
                        option {
                            value: kind.slug(),
                            selected: kind == details.connection_type,
                            {format!("{} / {}", kind.label_km(), kind.label_en())}
                        }
                    }
                }
            }
            FieldRow { label_km: "កាលបរិច្ឆេទចង់បានតភ្ជាប់", label_en: "Preferred connection date",
                TextInput {
                    value: date_value,
                    size: TextInputSize::Medium,
                    r#type: "date",
                    on_input: move |value: String| {
                        let preferred_date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                        on_change.call(ServiceDetails { preferred_date, ..date_base.clone() });
                    },
                }
            }
            FieldRow { label_km: "កំណត់ចំណាំអំពីការប្រើប្រាស់", label_en: "Usage note",
                textarea {
                    class: "w-full bg-white border border-slate-300 rounded-lg px-3 py-2 text-slate-700 placeholder-slate-400 focus:outline-none focus:ring-1 focus:ring-sky-500/50",
                    rows: "3",
                    placeholder: "ចំនួនសមាជិកគ្រួសារ ឬតម្រូវការប្រើប្រាស់ទឹក",
                    value: "{details.usage_note}",
                    oninput: move |e| {
                        on_change.call(ServiceDetails { usage_note: e.value(), ..note_base.clone() });
                    },
                }
            }
        }
    }
}
