use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod pages;
mod shared;
mod stats;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "server")]
use std::sync::Arc;

fn main() {
    #[cfg(feature = "server")]
    {
        backend::init_tracing();

        // Initialize the global DB once at boot
        let db_url = backend::db::resolve_db_url();
        {
            use dotenvy::dotenv;
            dotenv().ok();
            let rt = tokio::runtime::Runtime::new().expect("rt");
            rt.block_on(async {
                match backend::Db::connect(&db_url).await {
                    Ok(db) => {
                        let _ = backend::GLOBAL_DB.set(Arc::new(db));
                        eprintln!("[db] initialized");
                    }
                    Err(e) => {
                        eprintln!("[db] failed to init: {e}");
                    }
                }
            });
        }

        let mut args = std::env::args();
        let _bin = args.next();
        if let Some(cmd) = args.next() {
            if cmd == "gen-demo-data" {
                // optional: how many forms to seed
                let count = args
                    .next()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(24);
                let rt = tokio::runtime::Runtime::new().expect("rt");
                rt.block_on(async move {
                    let Some(db) = backend::GLOBAL_DB.get() else {
                        eprintln!("[gen-demo-data] GLOBAL_DB not initialized");
                        std::process::exit(1);
                    };
                    if let Err(e) = backend::demo::generate_demo_forms(db.clone(), count).await {
                        eprintln!("error generating demo forms: {e}");
                        std::process::exit(1);
                    }
                });
                return;
            }
        }
    }
    dioxus::launch(app::App);
}
