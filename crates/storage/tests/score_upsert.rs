//! Postgres-backed checks for the score store's upsert semantics.
//! Ignored by default; run against a disposable database with
//! `DATABASE_URL=postgres://... cargo test -p storage -- --ignored`

use std::collections::HashMap;

use rust_decimal_macros::dec;
use storage::Database;
use storage::repository::score::ScoreRepository;
use uuid::Uuid;

async fn seed_project(db: &Database) -> Result<(Uuid, Uuid), Box<dyn std::error::Error>> {
    let hackathon_id: Uuid = sqlx::query_scalar(
        "INSERT INTO hackathons (title, status) VALUES ($1, 'reviewing') RETURNING hackathon_id",
    )
    .bind(format!("upsert-check-{}", Uuid::new_v4()))
    .fetch_one(db.pool())
    .await?;

    let project_id: Uuid = sqlx::query_scalar(
        "INSERT INTO projects (hackathon_id, title) VALUES ($1, 'sample project') RETURNING project_id",
    )
    .bind(hackathon_id)
    .fetch_one(db.pool())
    .await?;

    Ok((hackathon_id, project_id))
}

#[tokio::test]
#[ignore = "needs a Postgres instance via DATABASE_URL"]
async fn resubmitting_identical_input_leaves_one_unchanged_row()
-> Result<(), Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")?;
    let db = Database::new(&database_url).await?;
    db.run_migrations().await?;

    let (hackathon_id, project_id) = seed_project(&db).await?;
    let judge_id = Uuid::new_v4();
    let values = HashMap::from([
        ("innovation".to_string(), 9),
        ("technical".to_string(), 8),
    ]);

    let repo = ScoreRepository::new(db.pool());
    let first = repo
        .upsert(
            judge_id,
            project_id,
            hackathon_id,
            &values,
            Some("solid work"),
            false,
            dec!(8.5),
        )
        .await?;
    let second = repo
        .upsert(
            judge_id,
            project_id,
            hackathon_id,
            &values,
            Some("solid work"),
            false,
            dec!(8.5),
        )
        .await?;

    // same record, same contents; only submitted_at is refreshed
    assert_eq!(second.score_id, first.score_id);
    assert_eq!(second.values(), first.values());
    assert_eq!(second.comments, first.comments);
    assert_eq!(second.is_draft, first.is_draft);
    assert_eq!(second.total_score, first.total_score);

    let row_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM scores WHERE judge_id = $1 AND project_id = $2",
    )
    .bind(judge_id)
    .bind(project_id)
    .fetch_one(db.pool())
    .await?;
    assert_eq!(row_count, 1);

    Ok(())
}

#[tokio::test]
#[ignore = "needs a Postgres instance via DATABASE_URL"]
async fn draft_then_final_overwrites_the_same_record()
-> Result<(), Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")?;
    let db = Database::new(&database_url).await?;
    db.run_migrations().await?;

    let (hackathon_id, project_id) = seed_project(&db).await?;
    let judge_id = Uuid::new_v4();
    let repo = ScoreRepository::new(db.pool());

    let draft_values = HashMap::from([("innovation".to_string(), 7)]);
    let draft = repo
        .upsert(
            judge_id,
            project_id,
            hackathon_id,
            &draft_values,
            None,
            true,
            dec!(7.0),
        )
        .await?;
    assert!(draft.is_draft);

    let final_values = HashMap::from([
        ("innovation".to_string(), 9),
        ("technical".to_string(), 8),
    ]);
    let finalized = repo
        .upsert(
            judge_id,
            project_id,
            hackathon_id,
            &final_values,
            Some("ready"),
            false,
            dec!(8.5),
        )
        .await?;

    assert_eq!(finalized.score_id, draft.score_id);
    assert!(!finalized.is_draft);
    assert_eq!(finalized.values(), &final_values);

    let stored = repo
        .find_by_judge_and_project(judge_id, project_id)
        .await?
        .expect("record must exist after upsert");
    assert!(!stored.is_draft);

    Ok(())
}
