use dioxus::prelude::*;

use crate::api::list_forms;
use crate::app::Route;
use crate::components::{ActionButton, FormListItem, FormListItemSkeleton};
use crate::shared::types::FormsFetch;
use crate::stats::{build_index, resolve_linked_form, top_by_recency};

#[allow(non_snake_case)]
#[component]
pub fn Forms() -> Element {
    let forms_res = use_resource(|| async move { list_forms().await });
    let fetch = use_memo(move || FormsFetch::from_poll((*forms_res.read()).as_ref()));
    let forms_by_id = use_memo(move || build_index(fetch.read().records()));
    // Full list, newest first
    let ordered = use_memo(move || {
        let fetch_v = fetch.read();
        let records = fetch_v.records();
        top_by_recency(records, records.len())
    });

    let nav = navigator();

    let fetch_v = fetch.read();
    let count = fetch_v.records().len();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-6 space-y-6",
            div { class: "flex flex-wrap items-center gap-3 border-b border-slate-800 pb-4",
                div { class: "min-w-0",
                    h1 { class: "text-xl font-semibold tracking-tight text-slate-200", "Forms" }
                    p { class: "mt-1 text-xs text-slate-500", "{count} forms, newest first" }
                }
                div { class: "ml-auto flex items-center gap-2",
                    Link {
                        to: Route::Dashboard {},
                        class: "text-xs text-slate-400 transition-colors hover:text-slate-200",
                        "Dashboard"
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

            {
                match &*fetch_v {
                    FormsFetch::Loading => rsx! {
                        FormListItemSkeleton { count: 5 }
                    },
                    FormsFetch::Failed => rsx! {
                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-6 text-sm text-slate-400",
                            "Could not load the form list."
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
                        div { class: "space-y-1.5",
                            for form in ordered.read().iter() {
                                FormListItem {
                                    key: "{form.id}",
                                    form: form.clone(),
                                    linked: resolve_linked_form(form, &forms_by_id.read()).cloned(),
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
