//! Step 1: applicant details

use crate::components::{TextInput, TextInputSize};
use dioxus::prelude::*;
use tonle_common::ApplicantDetails;

#[component]
pub fn ApplicantStep(
    details: ApplicantDetails,
    on_change: EventHandler<ApplicantDetails>,
) -> Element {
    let name_base = details.clone();
    let phone_base = details.clone();
    let address_base = details.clone();

    rsx! {
        div { class: "space-y-5",
            FieldRow { label_km: "ឈ្មោះពេញ", label_en: "Full name",
                TextInput {
                    value: details.full_name.clone(),
                    size: TextInputSize::Medium,
                    placeholder: "សុខ សុភា",
                    on_input: move |full_name| {
                        on_change.call(ApplicantDetails { full_name, ..name_base.clone() });
                    },
                }
            }
            FieldRow { label_km: "លេខទូរស័ព្ទ", label_en: "Phone number",
                TextInput {
                    value: details.phone.clone(),
                    size: TextInputSize::Medium,
                    r#type: "tel",
                    placeholder: "012 345 678",
                    on_input: move |phone| {
                        on_change.call(ApplicantDetails { phone, ..phone_base.clone() });
                    },
                }
            }
            FieldRow { label_km: "អាសយដ្ឋាន", label_en: "Address",
                TextInput {
                    value: details.address.clone(),
                    size: TextInputSize::Medium,
                    placeholder: "ផ្ទះលេខ ផ្លូវ សង្កាត់ ខណ្ឌ",
                    on_input: move |address| {
                        on_change.call(ApplicantDetails { address, ..address_base.clone() });
                    },
                }
            }
        }
    }
}

/// Labeled field wrapper shared by the form steps.
#[component]
pub fn FieldRow(label_km: &'static str, label_en: &'static str, children: Element) -> Element {
    rsx! {
        div {
            label { class: "block mb-1.5",
                span { class: "text-sm font-medium text-slate-700", "{label_km}" }
                span { class: "ml-2 text-xs text-slate-400", "{label_en}" }
            }
            {children}
        }
    }
}
