use dioxus::prelude::*;

use crate::api::create_form;
use crate::app::Route;
use crate::components::ActionButton;

#[allow(non_snake_case)]
#[component]
pub fn NewForm() -> Element {
    let mut title = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut save_failed = use_signal(|| false);
    let nav = navigator();

    let disabled = title.read().trim().is_empty() || *saving.read();
    let label = if *saving.read() {
        "Creating..."
    } else {
        "Create form"
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-6 space-y-6",
            Link {
                to: Route::Dashboard {},
                class: "text-xs text-slate-400 transition-colors hover:text-slate-200",
                "Back to dashboard"
            }
            div { class: "w-full max-w-md rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
                h1 { class: "text-xl font-semibold tracking-tight text-slate-200", "New form" }
                input {
                    class: "w-full rounded-xl border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 placeholder:text-slate-500 focus:outline-none focus:ring-2 focus:ring-emerald-500/40",
                    r#type: "text",
                    placeholder: "Form title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                if *save_failed.read() {
                    p { class: "text-xs text-red-400", "Could not create the form. Try again." }
                }
                ActionButton {
                    label: label.to_string(),
                    primary: true,
                    disabled: disabled,
                    onclick: move |_| {
                        let name = title.read().trim().to_string();
                        if name.is_empty() || *saving.peek() {
                            return;
                        }
                        saving.set(true);
                        save_failed.set(false);
                        spawn(async move {
                            match create_form(name).await {
                                Ok(form) => {
                                    nav.push(Route::FormDetail { id: form.id, tab: String::new() });
                                }
                                Err(_) => {
                                    save_failed.set(true);
                                    saving.set(false);
                                }
                            }
                        });
                    },
                }
            }
        }
    }
}
