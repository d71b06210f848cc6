use dioxus::prelude::*;

use crate::api::list_forms;
use crate::app::Route;
use crate::components::FormListItemSkeleton;
use crate::shared::types::FormsFetch;
use crate::stats::{build_index, resolve_linked_form};
use crate::utils::format::{format_count, format_timestamp};

const TAB_ACTIVE: &str = "rounded-lg bg-slate-800 px-3 py-1 text-xs text-slate-100";
const TAB_IDLE: &str =
    "rounded-lg px-3 py-1 text-xs text-slate-400 transition-colors hover:text-slate-200";

#[allow(non_snake_case)]
#[component]
pub fn FormDetail(id: String, tab: String) -> Element {
    let forms_res = use_resource(|| async move { list_forms().await });
    let fetch = use_memo(move || FormsFetch::from_poll((*forms_res.read()).as_ref()));
    let forms_by_id = use_memo(move || build_index(fetch.read().records()));

    let responses_tab = tab == "responses";
    let overview_class = if responses_tab { TAB_IDLE } else { TAB_ACTIVE };
    let responses_class = if responses_tab { TAB_ACTIVE } else { TAB_IDLE };

    let fetch_v = fetch.read();
    let index = forms_by_id.read();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-6 space-y-6",
            Link {
                to: Route::Dashboard {},
                class: "text-xs text-slate-400 transition-colors hover:text-slate-200",
                "Back to dashboard"
            }
            {
                match &*fetch_v {
                    FormsFetch::Loading => rsx! {
                        FormListItemSkeleton { count: 1 }
                    },
                    FormsFetch::Failed => rsx! {
                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-6 text-sm text-slate-400",
                            "Could not load this form."
                        }
                    },
                    FormsFetch::Ready(_) => match index.get(&id) {
                        None => rsx! {
                            div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-6 text-sm text-slate-400",
                                "Form not found."
                            }
                        },
                        Some(form) => {
                            let linked = resolve_linked_form(form, &index);
                            let updated = format_timestamp(form.updated_at.as_deref());
                            rsx! {
                                div { class: "space-y-4",
                                    div { class: "flex flex-wrap items-baseline gap-3",
                                        h1 { class: "text-xl font-semibold text-slate-200", "{form.display_title()}" }
                                        span { class: "text-xs text-slate-500", "Updated {updated}" }
                                    }
                                    div { class: "flex gap-2 border-b border-slate-800 pb-2",
                                        Link {
                                            to: Route::FormDetail { id: id.clone(), tab: String::new() },
                                            class: "{overview_class}",
                                            "Overview"
                                        }
                                        Link {
                                            to: Route::FormDetail { id: id.clone(), tab: "responses".to_string() },
                                            class: "{responses_class}",
                                            "Responses"
                                        }
                                    }
                                    if responses_tab {
                                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-8 text-center",
                                            p { class: "text-5xl font-bold text-emerald-400 tabular-nums",
                                                "{format_count(form.response_total())}"
                                            }
                                            p { class: "mt-2 text-sm text-slate-400", "responses collected" }
                                        }
                                    } else {
                                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 p-6 space-y-3 text-sm",
                                            div { class: "flex items-center gap-2",
                                                span { class: "w-32 shrink-0 text-slate-500", "Form id" }
                                                span { class: "font-mono text-xs text-slate-300", "{form.id}" }
                                            }
                                            div { class: "flex items-center gap-2",
                                                span { class: "w-32 shrink-0 text-slate-500", "Responses" }
                                                span { class: "tabular-nums text-slate-300", "{form.response_total()}" }
                                            }
                                            div { class: "flex items-center gap-2",
                                                span { class: "w-32 shrink-0 text-slate-500", "Linked form" }
                                                {
                                                    match linked {
                                                        Some(linked) => rsx! {
                                                            Link {
                                                                to: Route::FormDetail { id: linked.id.clone(), tab: String::new() },
                                                                class: "text-emerald-400 transition-colors hover:text-emerald-300",
                                                                "{linked.display_title()}"
                                                            }
                                                        },
                                                        None => rsx! {
                                                            span { class: "text-slate-400", "None" }
                                                        },
                                                    }
                                                }
                                            }
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
