use dioxus::prelude::*;

use crate::shared::types::FormRecord;

#[server(ListForms)]
pub async fn list_forms() -> Result<Vec<FormRecord>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::GLOBAL_DB;

        let Some(db) = GLOBAL_DB.get() else {
            eprintln!("list_forms: DB not initialized");
            return Err(ServerFnError::new("database not initialized"));
        };
        match db.list_forms().await {
            Ok(rows) => Ok(rows
                .into_iter()
                .map(|r| FormRecord {
                    id: r.id,
                    title: r.title,
                    response_count: serde_json::Value::from(r.response_count),
                    linked_form_id: r.linked_form_id,
                    updated_at: r.updated_at.map(|dt| dt.to_rfc3339()),
                })
                .collect()),
            Err(e) => {
                eprintln!("list_forms query error: {e}");
                Err(ServerFnError::new(format!("failed to load forms: {e}")))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(vec![])
    }
}

#[server(CreateForm)]
pub async fn create_form(title: String) -> Result<FormRecord, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::GLOBAL_DB;

        let Some(db) = GLOBAL_DB.get() else {
            eprintln!("create_form: DB not initialized");
            return Err(ServerFnError::new("database not initialized"));
        };
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ServerFnError::new("form title must not be empty"));
        }
        let id = format!("f{:08x}", rand::random::<u32>());
        let now = chrono::Utc::now();
        match db.upsert_form(&id, &title, 0, None, now).await {
            Ok(()) => Ok(FormRecord {
                id,
                title,
                response_count: serde_json::Value::from(0),
                linked_form_id: None,
                updated_at: Some(now.to_rfc3339()),
            }),
            Err(e) => {
                eprintln!("create_form insert error: {e}");
                Err(ServerFnError::new(format!("failed to create form: {e}")))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = title;
        Err(ServerFnError::new("create_form requires the server"))
    }
}
