//! Navigation footer for the service-request form
//!
//! Back is only offered past the first step and Next only before the last;
//! the store additionally no-ops out-of-range moves, so these buttons are
//! presentation over an already-safe state machine. Submit appears on the
//! last step and is disabled while a submission is running or until the
//! privacy terms are accepted.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, LoaderIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn NavigationButtons(
    is_first: bool,
    is_last: bool,
    can_submit: bool,
    is_submitting: bool,
    on_back: EventHandler<()>,
    on_next: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between mt-8",
            div {
                if !is_first {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        disabled: is_submitting,
                        onclick: move |_| on_back.call(()),
                        ChevronLeftIcon {}
                        span { "ថយក្រោយ" }
                        span { class: "text-slate-400", "Back" }
                    }
                }
            }
            div {
                if !is_last {
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_next.call(()),
                        span { "បន្ទាប់" }
                        span { class: "text-sky-200", "Next" }
                        ChevronRightIcon {}
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        disabled: !can_submit,
                        onclick: move |_| on_submit.call(()),
                        if is_submitting {
                            LoaderIcon { class: "w-4 h-4 animate-spin" }
                            span { "កំពុងដាក់ស្នើ..." }
                            span { class: "text-sky-200", "Submitting..." }
                        } else {
                            span { "ដាក់ស្នើសំណើ" }
                            span { class: "text-sky-200", "Submit" }
                        }
                    }
                }
            }
        }
    }
}
