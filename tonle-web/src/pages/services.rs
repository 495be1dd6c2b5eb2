use dioxus::prelude::*;
use tonle_ui::{
    submission::submit_request, use_scroll_reveal, ApplicantStep, ModalTone, NavigationButtons,
    PageContainer, PageHeader, RequestFormState, RevealSection, ReviewStep, ServiceStep,
    StatusModal, StepIndicator, StepLabel,
};

const SECTIONS: &[&str] = &["header", "form"];

#[component]
pub fn Services() -> Element {
    let reveal = use_scroll_reveal(SECTIONS);
    let mut state = use_signal(RequestFormState::new);

    let steps = state.read().steps;
    let draft = state.read().draft.clone();
    let can_submit = state.read().can_submit();
    let is_submitting = state.read().is_submitting;
    let privacy_accepted = state.read().privacy_accepted;
    let show_success = state.read().show_success;

    let labels = vec![
        StepLabel { km: "ព័ត៌មានអ្នកស្នើ", en: "Applicant" },
        StepLabel { km: "សេវាកម្ម", en: "Service" },
        StepLabel { km: "ពិនិត្យ និងបញ្ជាក់", en: "Review" },
    ];

    let step_view = match steps.current() {
        1 => rsx! {
            ApplicantStep {
                details: draft.applicant.clone(),
                on_change: move |applicant| state.write().draft.applicant = applicant,
            }
        },
        2 => rsx! {
            ServiceStep {
                details: draft.service.clone(),
                on_change: move |service| state.write().draft.service = service,
            }
        },
        _ => rsx! {
            ReviewStep {
                draft: draft.clone(),
                privacy_accepted,
                on_privacy_change: move |accepted| state.write().privacy_accepted = accepted,
            }
        },
    };

    rsx! {
        PageContainer {
            RevealSection { handle: reveal, section: "header",
                PageHeader {
                    title_km: "សំណើសេវាកម្មទឹក",
                    title_en: "Water Service Request",
                    subtitle: "បំពេញព័ត៌មានតាមជំហានខាងក្រោម ដើម្បីស្នើសុំការតភ្ជាប់ទឹកថ្មី។ Complete the steps below to request a new water connection.",
                }
            }

            RevealSection { handle: reveal, section: "form",
                div { class: "max-w-2xl mx-auto bg-white rounded-2xl shadow-sm border border-slate-100 p-8",
                    StepIndicator { current: steps.current(), labels }

                    {step_view}

                    NavigationButtons {
                        is_first: steps.is_first(),
                        is_last: steps.is_last(),
                        can_submit,
                        is_submitting,
                        on_back: move |_| state.write().prev_step(),
                        on_next: move |_| state.write().next_step(),
                        on_submit: move |_| {
                            let draft = state.write().begin_submission();
                            if let Some(draft) = draft {
                                spawn(async move {
                                    submit_request(draft).await;
                                    state.write().finish_submission();
                                });
                            }
                        },
                    }
                }
            }
        }

        StatusModal {
            is_open: show_success,
            tone: ModalTone::Success,
            title: "បានទទួលសំណើរបស់អ្នក",
            message: "យើងនឹងទាក់ទងអ្នកក្នុងរយៈពេល ៣ ថ្ងៃធ្វើការ។ We received your request and will contact you within three working days.",
            dismiss_label: "បិទ / Close",
            on_dismiss: move |_| state.write().acknowledge_success(),
        }
    }
}
