use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{Instructor, UpdateInstructorRequest};

pub async fn insert_instructor(
    db: &SqlitePool,
    id: i64,
    name: &str,
) -> Result<Instructor, sqlx::Error> {
    sqlx::query("INSERT INTO instructor (id, name) VALUES (?1, ?2)")
        .bind(id)
        .bind(name)
        .execute(db)
        .await?;

    Ok(Instructor {
        id,
        name: name.to_string(),
    })
}

/// Inserts the whole batch as one statement, so either every row commits or
/// none of them do. Returns the rows in input order.
pub async fn insert_instructors(
    db: &SqlitePool,
    rows: Vec<Instructor>,
) -> Result<Vec<Instructor>, sqlx::Error> {
    if rows.is_empty() {
        return Ok(rows);
    }

    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("INSERT INTO instructor (id, name) ");
    query.push_values(rows.iter(), |mut b, row| {
        b.push_bind(row.id).push_bind(row.name.clone());
    });
    query.build().execute(db).await?;

    Ok(rows)
}

pub async fn search_instructor_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Instructor>, sqlx::Error> {
    sqlx::query_as::<_, Instructor>("SELECT id, name FROM instructor WHERE id = ?1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn update_instructor_by_id(
    db: &SqlitePool,
    id: i64,
    req: UpdateInstructorRequest,
) -> Result<Option<Instructor>, sqlx::Error> {
    let mut current = match search_instructor_by_id(db, id).await? {
        Some(row) => row,
        None => return Ok(None),
    };

    if let Some(new_id) = req.id {
        current.id = new_id;
    }
    if let Some(name) = req.name {
        current.name = name;
    }

    sqlx::query("UPDATE instructor SET id = ?1, name = ?2 WHERE id = ?3")
        .bind(current.id)
        .bind(&current.name)
        .bind(id)
        .execute(db)
        .await?;

    Ok(Some(current))
}

/// Returns the row as it was before deletion, `None` when nothing matched.
pub async fn delete_instructor_by_id(
    db: &SqlitePool,
    id: i64,
) -> Result<Option<Instructor>, sqlx::Error> {
    let deleted = match search_instructor_by_id(db, id).await? {
        Some(row) => row,
        None => return Ok(None),
    };

    sqlx::query("DELETE FROM instructor WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(Some(deleted))
}
