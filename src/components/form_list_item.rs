use dioxus::prelude::*;

use crate::app::Route;
use crate::shared::types::FormRecord;
use crate::utils::format::{format_count, format_timestamp};

#[allow(non_snake_case)]
#[component]
pub fn FormListItem(
    form: FormRecord,
    #[props(!optional)] linked: Option<FormRecord>,
) -> Element {
    let responses = format_count(form.response_total());
    let updated = format_timestamp(form.updated_at.as_deref());

    rsx! {
        div { class: "flex items-center gap-3 rounded-xl border border-slate-800 bg-slate-900/60 px-4 py-3 transition-colors hover:bg-slate-900",
            div { class: "min-w-0 flex-1",
                Link {
                    to: Route::FormDetail { id: form.id.clone(), tab: String::new() },
                    class: "block truncate text-sm font-medium text-slate-200 transition-colors hover:text-white",
                    "{form.display_title()}"
                }
                div { class: "mt-1 flex flex-wrap items-center gap-x-2 gap-y-1 text-xs text-slate-400",
                    span { class: "tabular-nums", "{responses} responses" }
                    span { class: "text-slate-600", "·" }
                    span { "Updated {updated}" }
                    if let Some(linked) = &linked {
                        span { class: "text-slate-600", "·" }
                        Link {
                            to: Route::FormDetail { id: linked.id.clone(), tab: String::new() },
                            class: "text-emerald-400/80 transition-colors hover:text-emerald-300",
                            "Links to {linked.display_title()}"
                        }
                    }
                }
            }
            Link {
                to: Route::FormDetail { id: form.id.clone(), tab: "responses".to_string() },
                class: "shrink-0 rounded-lg border border-slate-700 px-2.5 py-1 text-xs text-slate-300 transition-colors hover:bg-slate-800",
                "Responses"
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn FormListItemSkeleton(count: usize) -> Element {
    rsx! {
        div { class: "space-y-1.5",
            for i in 0..count {
                div {
                    key: "{i}",
                    class: "animate-pulse rounded-xl border border-slate-800 bg-slate-900/60 px-4 py-3",
                    div { class: "h-4 w-48 rounded bg-slate-800" }
                    div { class: "mt-2 h-3 w-32 rounded bg-slate-800" }
                }
            }
        }
    }
}
