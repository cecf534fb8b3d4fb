use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Topic, TopicWithWeek, UpdateTopicRequest};

pub async fn insert_topic(
    db: &SqlitePool,
    week_number: i64,
    name: &str,
) -> Result<Topic, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO topic (id, week_number, name) VALUES (?1, ?2, ?3)")
        .bind(&id)
        .bind(week_number)
        .bind(name)
        .execute(db)
        .await?;

    Ok(Topic {
        id,
        week_number,
        name: name.to_string(),
    })
}

pub async fn update_topic_by_id(
    db: &SqlitePool,
    id: &str,
    req: UpdateTopicRequest,
) -> Result<Option<Topic>, sqlx::Error> {
    let mut current = match sqlx::query_as::<_, Topic>(
        "SELECT id, week_number, name FROM topic WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db)
    .await?
    {
        Some(row) => row,
        None => return Ok(None),
    };

    if let Some(week_number) = req.week_number {
        current.week_number = week_number;
    }
    if let Some(name) = req.name {
        current.name = name;
    }

    sqlx::query("UPDATE topic SET week_number = ?1, name = ?2 WHERE id = ?3")
        .bind(current.week_number)
        .bind(&current.name)
        .bind(id)
        .execute(db)
        .await?;

    Ok(Some(current))
}

/// Topics whose name contains `query`, each joined with the owning week's
/// name. The match uses SQLite `LIKE`, so it is ASCII-case-insensitive.
pub async fn search_topics_with_week(
    db: &SqlitePool,
    query: &str,
) -> Result<Vec<TopicWithWeek>, sqlx::Error> {
    let pattern = format!("%{}%", query);

    sqlx::query_as::<_, TopicWithWeek>(
        r#"
        SELECT
            topic.id,
            topic.week_number,
            topic.name,
            week.name AS week_name
        FROM topic
        INNER JOIN week ON week.number = topic.week_number
        WHERE topic.name LIKE ?1
        "#,
    )
    .bind(pattern)
    .fetch_all(db)
    .await
}

/// Returns how many rows were deleted (0 or 1), not the row itself.
pub async fn delete_topic_by_id(db: &SqlitePool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM topic WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
