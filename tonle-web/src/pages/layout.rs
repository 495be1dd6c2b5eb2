use crate::Route;
use dioxus::prelude::*;
use tonle_ui::DropletIcon;

struct NavEntry {
    label_km: &'static str,
    label_en: &'static str,
    route: Route,
}

/// Site chrome: sticky header with navigation, footer with contact lines.
#[component]
pub fn SiteLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_entries = [
        NavEntry {
            label_km: "ទំព័រដើម",
            label_en: "Home",
            route: Route::Home {},
        },
        NavEntry {
            label_km: "អំពីយើង",
            label_en: "About",
            route: Route::About {},
        },
        NavEntry {
            label_km: "សេវាកម្ម",
            label_en: "Services",
            route: Route::Services {},
        },
    ];

    rsx! {
        div { class: "min-h-screen flex flex-col",
            header { class: "bg-white border-b border-slate-200 sticky top-0 z-50",
                div { class: "container mx-auto px-6 h-16 flex items-center justify-between",
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 text-sky-700",
                        DropletIcon { class: "w-6 h-6" }
                        span { class: "font-bold text-lg", "ទន្លេ" }
                        span { class: "text-slate-400 text-sm hidden sm:inline", "Tonle Water Supply" }
                    }
                    nav { class: "flex items-center gap-1",
                        for entry in nav_entries {
                            Link {
                                to: entry.route.clone(),
                                class: if current_route == entry.route {
                                    "px-3 py-2 rounded-lg text-sm font-medium bg-sky-50 text-sky-700"
                                } else {
                                    "px-3 py-2 rounded-lg text-sm font-medium text-slate-600 hover:text-sky-700 hover:bg-slate-50"
                                },
                                span { "{entry.label_km}" }
                                span { class: "ml-1.5 text-xs text-slate-400", "{entry.label_en}" }
                            }
                        }
                    }
                }
            }

            main { class: "flex-1", Outlet::<Route> {} }

            footer { class: "bg-sky-950 text-sky-100",
                div { class: "container mx-auto px-6 py-10 grid grid-cols-1 md:grid-cols-3 gap-8",
                    div {
                        p { class: "font-bold text-white mb-2", "ទន្លេ - រដ្ឋាករទឹក" }
                        p { class: "text-sm text-sky-300", "Tonle Water Supply Authority" }
                    }
                    div {
                        p { class: "text-sm", "អគារលេខ ៤៥ មហាវិថីព្រះនរោត្តម រាជធានីភ្នំពេញ" }
                        p { class: "text-sm text-sky-300", "45 Preah Norodom Blvd, Phnom Penh" }
                    }
                    div {
                        p { class: "text-sm", "ទូរស័ព្ទ: 023 123 456" }
                        p { class: "text-sm text-sky-300", "បើកជូន ២៤ម៉ោង / Open 24 hours" }
                    }
                }
            }
        }
    }
}
