use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::Week;

pub async fn insert_week(
    db: &SqlitePool,
    number: i64,
    name: &str,
    instructor_id: i64,
) -> Result<Week, sqlx::Error> {
    sqlx::query("INSERT INTO week (number, name, instructor_id) VALUES (?1, ?2, ?3)")
        .bind(number)
        .bind(name)
        .bind(instructor_id)
        .execute(db)
        .await?;

    Ok(Week {
        number,
        name: name.to_string(),
        instructor_id,
    })
}

/// One multi-row statement: a duplicate number or unknown instructor anywhere
/// in the batch fails the whole insert.
pub async fn insert_weeks(db: &SqlitePool, rows: Vec<Week>) -> Result<Vec<Week>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(rows);
    }

    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new("INSERT INTO week (number, name, instructor_id) ");
    query.push_values(rows.iter(), |mut b, row| {
        b.push_bind(row.number)
            .push_bind(row.name.clone())
            .push_bind(row.instructor_id);
    });
    query.build().execute(db).await?;

    Ok(rows)
}

pub async fn find_all_weeks(db: &SqlitePool) -> Result<Vec<Week>, sqlx::Error> {
    sqlx::query_as::<_, Week>("SELECT number, name, instructor_id FROM week")
        .fetch_all(db)
        .await
}
