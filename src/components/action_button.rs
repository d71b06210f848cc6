use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn ActionButton(
    label: String,
    onclick: EventHandler<MouseEvent>,
    primary: Option<bool>,
    disabled: Option<bool>,
) -> Element {
    let primary = primary.unwrap_or(false);
    let disabled = disabled.unwrap_or(false);
    let tone = if primary {
        "border-emerald-500/40 bg-emerald-500/15 text-emerald-300 hover:bg-emerald-500/25"
    } else {
        "border-slate-700 bg-slate-900/60 text-slate-300 hover:bg-slate-800"
    };

    rsx! {
        button {
            class: "rounded-xl border px-3 py-1.5 text-sm transition-colors disabled:opacity-50 disabled:pointer-events-none {tone}",
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
