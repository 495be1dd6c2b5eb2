//! Step 3: review and consent

use dioxus::prelude::*;
use tonle_common::RequestDraft;

#[component]
pub fn ReviewStep(
    draft: RequestDraft,
    privacy_accepted: bool,
    on_privacy_change: EventHandler<bool>,
) -> Element {
    let date_text = draft
        .service
        .preferred_date
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|| "មិនទាន់កំណត់ / Not set".to_string());

    let note_text = if draft.service.usage_note.is_empty() {
        "—".to_string()
    } else {
        draft.service.usage_note.clone()
    };

    rsx! {
        div {
            div { class: "bg-slate-50 rounded-xl border border-slate-200 divide-y divide-slate-200 mb-6",
                ReviewRow { label_km: "ឈ្មោះពេញ", label_en: "Full name", value: draft.applicant.full_name.clone() }
                ReviewRow { label_km: "លេខទូរស័ព្ទ", label_en: "Phone", value: draft.applicant.phone.clone() }
                ReviewRow { label_km: "អាសយដ្ឋាន", label_en: "Address", value: draft.applicant.address.clone() }
                ReviewRow {
                    label_km: "ប្រភេទការតភ្ជាប់",
                    label_en: "Connection type",
                    value: format!(
                        "{} / {}",
                        draft.service.connection_type.label_km(),
                        draft.service.connection_type.label_en(),
                    ),
                }
                ReviewRow { label_km: "កាលបរិច្ឆេទ", label_en: "Preferred date", value: date_text }
                ReviewRow { label_km: "កំណត់ចំណាំ", label_en: "Usage note", value: note_text }
            }

            label { class: "flex items-start gap-3 cursor-pointer",
                input {
                    r#type: "checkbox",
                    class: "mt-1 w-4 h-4 accent-sky-600",
                    checked: privacy_accepted,
                    oninput: move |e| on_privacy_change.call(e.checked()),
                }
                span {
                    p { class: "text-sm text-slate-700",
                        "ខ្ញុំយល់ព្រមឱ្យប្រើប្រាស់ព័ត៌មានខាងលើ សម្រាប់ដំណើរការសំណើសេវាកម្មទឹក។"
                    }
                    p { class: "text-xs text-slate-400",
                        "I agree that the information above may be used to process my water service request."
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewRow(label_km: &'static str, label_en: &'static str, value: String) -> Element {
    let display = if value.is_empty() { "—" } else { value.as_str() };

    rsx! {
        div { class: "flex items-baseline justify-between gap-6 px-5 py-3",
            div { class: "shrink-0",
                span { class: "text-sm font-medium text-slate-600", "{label_km}" }
                span { class: "ml-2 text-xs text-slate-400", "{label_en}" }
            }
            p { class: "text-sm text-slate-800 text-right", "{display}" }
        }
    }
}
