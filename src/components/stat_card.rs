use dioxus::prelude::*;

use crate::app::Route;

#[allow(non_snake_case)]
#[component]
pub fn StatCard(
    label: String,
    value: String,
    hint: Option<String>,
    to: Option<Route>,
) -> Element {
    let card = rsx! {
        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-5 transition-colors hover:bg-slate-900",
            p { class: "text-[11px] text-slate-400", "{label}" }
            p { class: "mt-1 text-2xl font-semibold text-slate-100 tabular-nums", "{value}" }
            if let Some(hint) = &hint {
                p { class: "mt-1 text-[11px] text-slate-500", "{hint}" }
            }
        }
    };

    match to {
        Some(route) => rsx! {
            Link {
                to: route,
                class: "block rounded-2xl focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-slate-600",
                {card}
            }
        },
        None => card,
    }
}
