use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::api::list_forms;
use crate::app::Route;
use crate::components::{ActionButton, FormListItem, FormListItemSkeleton, StatCard};
use crate::shared::types::FormsFetch;
use crate::stats::{
    build_index, compute_stats, resolve_linked_form, top_by_recency, top_by_responses,
};
use crate::utils::format::format_timestamp;

/// Rows per ranked section.
const TOP_N: usize = 5;

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let mut forms_res = use_resource(|| async move { list_forms().await });

    // Refresh-in-flight flag, kept separate from the load state below
    let mut refreshing = use_signal(|| false);
    use_effect(move || {
        if forms_res.read().is_some() && *refreshing.peek() {
            refreshing.set(false);
        }
    });

    // Derived values, recomputed only when the fetched list changes
    let fetch = use_memo(move || FormsFetch::from_poll((*forms_res.read()).as_ref()));
    let stats = use_memo(move || compute_stats(fetch.read().records()));
    let forms_by_id = use_memo(move || build_index(fetch.read().records()));
    let recent = use_memo(move || top_by_recency(fetch.read().records(), TOP_N));
    let most_responded = use_memo(move || top_by_responses(fetch.read().records(), TOP_N));

    let nav = navigator();

    let s = (*stats.read()).clone();
    let last_updated = format_timestamp(s.last_updated.map(|dt| dt.to_rfc3339()).as_deref());
    let refresh_label = if *refreshing.read() {
        "Refreshing..."
    } else {
        "Refresh"
    };

    let fetch_v = fetch.read();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-6 space-y-6",
            div { class: "flex flex-wrap items-center gap-3 border-b border-slate-800 pb-4",
                div { class: "min-w-0",
                    h1 { class: "text-xl font-semibold tracking-tight text-slate-200", "Dashboard" }
                    p { class: "mt-1 text-xs text-slate-500",
                        "Overview of your forms, quick actions and recent activity"
                    }
                }
                div { class: "ml-auto flex items-center gap-2",
                    ActionButton {
                        label: refresh_label.to_string(),
                        disabled: *refreshing.read(),
                        onclick: move |_| {
                            #[cfg(feature = "web")]
                            {
                                info!("[dashboard] manual refresh requested");
                            }
                            refreshing.set(true);
                            forms_res.restart();
                        },
                    }
                    ActionButton {
                        label: "New form",
                        primary: true,
                        onclick: move |_| {
                            nav.push(Route::NewForm {});
                        },
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-3 sm:grid-cols-2 lg:grid-cols-4",
                StatCard {
                    label: "Total forms",
                    value: s.total_forms.to_string(),
                    to: Route::Forms {},
                }
                StatCard {
                    label: "Total responses",
                    value: s.total_responses.to_string(),
                    hint: "Across all forms",
                    to: Route::Forms {},
                }
                StatCard {
                    label: "Linked forms",
                    value: s.linked_forms.to_string(),
                    hint: "Forwarding to another form",
                }
                StatCard {
                    label: "Last updated",
                    value: last_updated,
                    hint: "Latest form update",
                }
            }

            {
                match &*fetch_v {
                    FormsFetch::Loading => rsx! {
                        div { class: "space-y-3",
                            div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-4 text-sm text-slate-400",
                                "Loading dashboard..."
                            }
                            FormListItemSkeleton { count: 3 }
                        }
                    },
                    FormsFetch::Failed => rsx! {
                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-6 text-sm text-slate-400",
                            "Could not load the dashboard data."
                        }
                    },
                    FormsFetch::Ready(records) if records.is_empty() => rsx! {
                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-6 text-sm text-slate-400",
                            p { "No forms yet." }
                            Link {
                                to: Route::NewForm {},
                                class: "mt-2 inline-block text-emerald-400 transition-colors hover:text-emerald-300",
                                "Create your first form"
                            }
                        }
                    },
                    FormsFetch::Ready(_) => rsx! {
                        div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                            section { class: "space-y-3",
                                div { class: "flex items-center gap-2",
                                    h2 { class: "text-sm font-semibold text-slate-200", "Recently updated" }
                                    div { class: "ml-auto",
                                        Link {
                                            to: Route::Forms {},
                                            class: "text-xs text-slate-400 transition-colors hover:text-slate-200",
                                            "View all"
                                        }
                                    }
                                }
                                div { class: "space-y-1.5",
                                    for form in recent.read().iter() {
                                        FormListItem {
                                            key: "{form.id}",
                                            form: form.clone(),
                                            linked: resolve_linked_form(form, &forms_by_id.read()).cloned(),
                                        }
                                    }
                                }
                            }

                            section { class: "space-y-3",
                                div { class: "flex items-center gap-2",
                                    h2 { class: "text-sm font-semibold text-slate-200", "Most responses" }
                                    div { class: "ml-auto",
                                        Link {
                                            to: Route::Forms {},
                                            class: "text-xs text-slate-400 transition-colors hover:text-slate-200",
                                            "Go to forms"
                                        }
                                    }
                                }
                                div { class: "space-y-1.5",
                                    for form in most_responded.read().iter() {
                                        FormListItem {
                                            key: "{form.id}",
                                            form: form.clone(),
                                            linked: resolve_linked_form(form, &forms_by_id.read()).cloned(),
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
