//! Step indicator for the service-request form

use crate::components::icons::CheckIcon;
use dioxus::prelude::*;

/// Bilingual caption under a step circle.
#[derive(Clone, Debug, PartialEq)]
pub struct StepLabel {
    pub km: &'static str,
    pub en: &'static str,
}

/// Numbered circles with connectors; completed steps show a check, the
/// current step is highlighted.
#[component]
pub fn StepIndicator(current: u8, labels: Vec<StepLabel>) -> Element {
    let total = labels.len() as u8;

    rsx! {
        ol { class: "flex items-start justify-center mb-10",
            for (idx , label) in labels.into_iter().enumerate() {
                StepIndicatorItem {
                    number: (idx + 1) as u8,
                    current,
                    total,
                    label,
                }
            }
        }
    }
}

#[component]
fn StepIndicatorItem(number: u8, current: u8, total: u8, label: StepLabel) -> Element {
    let completed = number < current;
    let active = number == current;

    let circle_class = if completed {
        "bg-sky-600 text-white"
    } else if active {
        "bg-sky-600 text-white ring-4 ring-sky-100"
    } else {
        "bg-slate-200 text-slate-500"
    };

    let connector_class = if completed {
        "bg-sky-600"
    } else {
        "bg-slate-200"
    };

    rsx! {
        li { class: "flex items-start",
            div { class: "flex flex-col items-center w-24",
                div { class: "w-10 h-10 rounded-full flex items-center justify-center font-semibold {circle_class}",
                    if completed {
                        CheckIcon { class: "w-5 h-5" }
                    } else {
                        "{number}"
                    }
                }
                p { class: "mt-2 text-sm font-medium text-slate-700 text-center", "{label.km}" }
                p { class: "text-xs text-slate-400 text-center", "{label.en}" }
            }
            if number < total {
                div { class: "h-0.5 w-10 md:w-16 mt-5 {connector_class}" }
            }
        }
    }
}
