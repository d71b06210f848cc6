#![cfg(feature = "server")]
use anyhow::Result;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Row, Sqlite};
use std::str::FromStr;
use std::sync::Arc;

pub static GLOBAL_DB: OnceCell<Arc<Db>> = OnceCell::new();

pub fn resolve_db_url() -> String {
    use std::{env, fs, path::PathBuf};
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }
    // Place DB under project_root/data/forms.db
    let root = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(root);
    path.push("data");
    let _ = fs::create_dir_all(&path);
    path.push("forms.db");
    // SQLx expects absolute paths in the form sqlite:///abs/path
    let path_str = path.to_string_lossy();
    let trimmed = path_str
        .strip_prefix('/')
        .map(|s| s.to_string())
        .unwrap_or_else(|| path_str.to_string());
    format!("sqlite:///{}?mode=rwc", trimmed)
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: Pool<Sqlite>,
}

#[derive(Debug, Clone)]
pub struct FormRow {
    pub id: String,
    pub title: String,
    pub response_count: i64,
    pub linked_form_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

impl Db {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(3)
            .connect_with(opts)
            .await?;
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS forms (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                response_count INTEGER NOT NULL DEFAULT 0,
                linked_form_id TEXT,
                updated_at TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn upsert_form(
        &self,
        id: &str,
        title: &str,
        response_count: i64,
        linked_form_id: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let created_at = Utc::now();
        sqlx::query(
            r#"INSERT INTO forms
            (id, title, response_count, linked_form_id, updated_at, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                response_count = excluded.response_count,
                linked_form_id = excluded.linked_form_id,
                updated_at = excluded.updated_at"#,
        )
        .bind(id)
        .bind(title)
        .bind(response_count)
        .bind(linked_form_id)
        .bind(updated_at.to_rfc3339())
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All forms in creation order; this is the stable input order the
    /// dashboard's tie-breaking relies on.
    pub async fn list_forms(&self) -> Result<Vec<FormRow>> {
        let rows = sqlx::query(
            r#"SELECT id, title, response_count, linked_form_id, updated_at, created_at
            FROM forms
            ORDER BY created_at ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for r in rows {
            let id: String = r.try_get("id")?;
            let title: String = r.try_get("title")?;
            let response_count: i64 = r.try_get("response_count")?;
            let linked_form_id: Option<String> = r.try_get("linked_form_id")?;
            let updated_at_str: Option<String> = r.try_get("updated_at")?;
            let created_at_str: String = r.try_get("created_at")?;

            let updated_at = match updated_at_str {
                Some(s) => {
                    Some(DateTime::parse_from_rfc3339(&s).map(|dt| dt.with_timezone(&Utc))?)
                }
                None => None,
            };
            let created_at =
                DateTime::parse_from_rfc3339(&created_at_str).map(|dt| dt.with_timezone(&Utc))?;

            out.push(FormRow {
                id,
                title,
                response_count,
                linked_form_id,
                updated_at,
                created_at,
            });
        }
        Ok(out)
    }
}
