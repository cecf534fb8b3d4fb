use std::str::FromStr;

use curriculum_backend::db::{TOPIC_TABLE_NAME, instructors, topics, weeks};
use curriculum_backend::models::{Topic, UpdateTopicRequest};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

// Topics hang off weeks, which hang off instructors, so both get seeded
async fn setup_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Failed to parse database URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    instructors::insert_instructor(&pool, 1, "Bikash")
        .await
        .expect("Failed to seed instructor");
    weeks::insert_week(&pool, 5, "Week #7", 1)
        .await
        .expect("Failed to seed week");

    pool
}

async fn count_topics(db: &SqlitePool) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {}", TOPIC_TABLE_NAME);
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(db)
        .await
        .expect("Failed to count rows")
}

#[tokio::test]
async fn insert_topic_returns_the_inserted_row() {
    let db = setup_db().await;

    let result = topics::insert_topic(&db, 5, "HTML & CSS")
        .await
        .expect("Failed to insert topic");

    assert_eq!(result.id.len(), 36, "id must be a canonical UUID string");
    assert!(Uuid::parse_str(&result.id).is_ok());
    assert_eq!(result.week_number, 5);
    assert_eq!(result.name, "HTML & CSS");
}

#[tokio::test]
async fn insert_topic_is_persisted() {
    let db = setup_db().await;

    let result = topics::insert_topic(&db, 5, "Flexbox")
        .await
        .expect("Failed to insert topic");

    // Query the table directly instead of going back through the store
    let sql = format!(
        "SELECT id, week_number, name FROM {} WHERE week_number = 5",
        TOPIC_TABLE_NAME
    );
    let rows = sqlx::query_as::<_, Topic>(&sql)
        .fetch_all(&db)
        .await
        .expect("Failed to fetch topics");

    assert_eq!(rows, vec![result]);
}

#[tokio::test]
async fn insert_topic_rejects_unknown_week() {
    let db = setup_db().await;

    let err = topics::insert_topic(&db, 9, "Backend")
        .await
        .expect_err("Unknown week must be rejected");
    assert!(
        err.as_database_error()
            .is_some_and(|e| e.is_foreign_key_violation()),
        "expected a foreign key violation, got: {err}"
    );

    assert_eq!(count_topics(&db).await, 0);
}

#[tokio::test]
async fn update_topic_by_id_returns_the_updated_row() {
    let db = setup_db().await;

    let inserted = topics::insert_topic(&db, 5, "Express")
        .await
        .expect("Failed to insert topic");

    let patch = UpdateTopicRequest {
        week_number: None,
        name: Some("MongoDB".to_string()),
    };
    let result = topics::update_topic_by_id(&db, &inserted.id, patch)
        .await
        .expect("Failed to update topic");

    assert_eq!(
        result,
        Some(Topic {
            id: inserted.id.clone(),
            week_number: 5,
            name: "MongoDB".to_string(),
        })
    );

    let sql = format!(
        "SELECT id, week_number, name FROM {} WHERE week_number = 5",
        TOPIC_TABLE_NAME
    );
    let rows = sqlx::query_as::<_, Topic>(&sql)
        .fetch_all(&db)
        .await
        .expect("Failed to fetch topics");
    assert_eq!(Some(rows[0].clone()), result);
}

#[tokio::test]
async fn update_topic_by_id_returns_none_for_unknown_id() {
    let db = setup_db().await;

    let patch = UpdateTopicRequest {
        week_number: None,
        name: Some("MongoDB".to_string()),
    };
    let result = topics::update_topic_by_id(&db, &Uuid::new_v4().to_string(), patch)
        .await
        .expect("Failed to update topic");

    assert_eq!(result, None);
}

#[tokio::test]
async fn search_topics_with_week_returns_matching_rows() {
    let db = setup_db().await;

    weeks::insert_week(&db, 6, "Week #8", 1)
        .await
        .expect("Failed to seed week");

    topics::insert_topic(&db, 5, "HTML & CSS")
        .await
        .expect("Failed to insert topic");
    topics::insert_topic(&db, 5, "CSS Grid")
        .await
        .expect("Failed to insert topic");
    topics::insert_topic(&db, 6, "SQL Joins")
        .await
        .expect("Failed to insert topic");

    let result = topics::search_topics_with_week(&db, "CSS")
        .await
        .expect("Failed to search topics");

    assert_eq!(result.len(), 2);
    for row in &result {
        assert!(row.name.contains("CSS"));
        assert_eq!(row.week_number, 5);
        assert_eq!(row.week_name, "Week #7");
    }

    let result = topics::search_topics_with_week(&db, "Joins")
        .await
        .expect("Failed to search topics");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "SQL Joins");
    assert_eq!(result[0].week_number, 6);
    assert_eq!(result[0].week_name, "Week #8");
}

#[tokio::test]
async fn search_topics_with_week_is_case_insensitive() {
    let db = setup_db().await;

    topics::insert_topic(&db, 5, "HTML & CSS")
        .await
        .expect("Failed to insert topic");

    let result = topics::search_topics_with_week(&db, "css")
        .await
        .expect("Failed to search topics");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "HTML & CSS");
}

#[tokio::test]
async fn search_topics_with_week_returns_empty_for_no_match() {
    let db = setup_db().await;

    topics::insert_topic(&db, 5, "Flexbox")
        .await
        .expect("Failed to insert topic");

    let result = topics::search_topics_with_week(&db, "aa")
        .await
        .expect("Failed to search topics");

    assert!(result.is_empty());
}

#[tokio::test]
async fn delete_topic_by_id_returns_the_deleted_count() {
    let db = setup_db().await;

    let inserted = topics::insert_topic(&db, 5, "Flexbox")
        .await
        .expect("Failed to insert topic");

    let deleted = topics::delete_topic_by_id(&db, &inserted.id)
        .await
        .expect("Failed to delete topic");

    assert_eq!(deleted, 1);
    assert_eq!(count_topics(&db).await, 0);
}

#[tokio::test]
async fn delete_topic_by_id_returns_zero_for_unknown_id() {
    let db = setup_db().await;

    let deleted = topics::delete_topic_by_id(&db, &Uuid::new_v4().to_string())
        .await
        .expect("Failed to delete topic");

    assert_eq!(deleted, 0);
}
