#![cfg(feature = "server")]
use crate::backend::db;
use std::sync::Arc;

/// Seeds the forms table with a reproducible spread of demo forms: skewed
/// response counts, a share of linked forms, updates over the last two
/// months.
pub async fn generate_demo_forms(db: Arc<db::Db>, count: usize) -> anyhow::Result<()> {
    use chrono::{Duration, Utc};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const TOPICS: &[&str] = &[
        "Customer feedback",
        "Event registration",
        "Job application",
        "Product survey",
        "Newsletter signup",
        "Bug report",
        "Workshop RSVP",
        "Onboarding checklist",
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let now = Utc::now();
    let mut ids: Vec<String> = Vec::with_capacity(count);

    for i in 0..count {
        let id = format!("f{:08x}", rng.gen::<u32>());
        let title = format!("{} {}", TOPICS[i % TOPICS.len()], i + 1);

        let roll: u8 = rng.gen_range(0..100);
        let response_count: i64 = if roll < 50 {
            rng.gen_range(0..=25)
        } else if roll < 85 {
            rng.gen_range(25..=250)
        } else {
            rng.gen_range(250..=2_000)
        };

        let linked_form_id = if !ids.is_empty() && rng.gen_bool(0.3) {
            Some(ids[rng.gen_range(0..ids.len())].clone())
        } else {
            None
        };

        let updated_at = now - Duration::minutes(rng.gen_range(0..60 * 24 * 60));

        db.upsert_form(
            &id,
            &title,
            response_count,
            linked_form_id.as_deref(),
            updated_at,
        )
        .await?;
        ids.push(id);
    }

    eprintln!("Inserted {} demo forms", count);
    Ok(())
}
