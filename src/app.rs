use dioxus::prelude::*;

use crate::pages::{Dashboard, FormDetail, Forms, NewForm};
use crate::{FAVICON, TAILWIND_CSS};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/forms")]
    Forms {},
    #[route("/forms/new-form")]
    NewForm {},
    #[route("/forms/:id?:tab")]
    FormDetail { id: String, tab: String },
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        Router::<Route> {}
    }
}
