use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::patch;
use axum::{Router, extract::State, http::StatusCode, routing::get, routing::post};
use serde::{Deserialize, Serialize};

use crate::db::{instructors, topics, weeks};
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

#[derive(Deserialize)]
struct TopicSearchParams {
    q: Option<String>,
}

#[derive(Serialize)]
struct DeleteTopicResponse {
    deleted: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/instructors", post(create_instructor))
        .route("/instructors/batch", post(create_instructors))
        .route(
            "/instructors/{id}",
            get(get_instructor)
                .patch(update_instructor)
                .delete(delete_instructor),
        )
        .route("/weeks", get(list_weeks).post(create_week))
        .route("/weeks/batch", post(create_weeks))
        .route("/topics", post(create_topic))
        .route("/topics/search", get(search_topics))
        .route("/topics/{id}", patch(update_topic).delete(delete_topic))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn create_instructor(
    State(state): State<AppState>,
    Json(req): Json<NewInstructorRequest>,
) -> Result<Json<Instructor>, AppError> {
    let instructor = instructors::insert_instructor(&state.db, req.id, &req.name).await?;
    Ok(Json(instructor))
}

async fn create_instructors(
    State(state): State<AppState>,
    Json(rows): Json<Vec<Instructor>>,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let inserted = instructors::insert_instructors(&state.db, rows).await?;
    Ok(Json(inserted))
}

async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Instructor>, AppError> {
    let instructor = instructors::search_instructor_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(instructor))
}

async fn update_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInstructorRequest>,
) -> Result<Json<Instructor>, AppError> {
    let instructor = instructors::update_instructor_by_id(&state.db, id, req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(instructor))
}

async fn delete_instructor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Instructor>, AppError> {
    let instructor = instructors::delete_instructor_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(instructor))
}

async fn list_weeks(State(state): State<AppState>) -> Result<Json<Vec<Week>>, AppError> {
    let weeks = weeks::find_all_weeks(&state.db).await?;
    Ok(Json(weeks))
}

async fn create_week(
    State(state): State<AppState>,
    Json(req): Json<NewWeekRequest>,
) -> Result<Json<Week>, AppError> {
    let week = weeks::insert_week(&state.db, req.number, &req.name, req.instructor_id).await?;
    Ok(Json(week))
}

async fn create_weeks(
    State(state): State<AppState>,
    Json(rows): Json<Vec<Week>>,
) -> Result<Json<Vec<Week>>, AppError> {
    let inserted = weeks::insert_weeks(&state.db, rows).await?;
    Ok(Json(inserted))
}

async fn create_topic(
    State(state): State<AppState>,
    Json(req): Json<NewTopicRequest>,
) -> Result<Json<Topic>, AppError> {
    let topic = topics::insert_topic(&state.db, req.week_number, &req.name).await?;
    Ok(Json(topic))
}

async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTopicRequest>,
) -> Result<Json<Topic>, AppError> {
    let topic = topics::update_topic_by_id(&state.db, &id, req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(topic))
}

async fn search_topics(
    State(state): State<AppState>,
    Query(params): Query<TopicSearchParams>,
) -> Result<Json<Vec<TopicWithWeek>>, AppError> {
    let q = params
        .q
        .ok_or_else(|| AppError::BadRequest("missing query parameter q".to_string()))?;
    let results = topics::search_topics_with_week(&state.db, &q).await?;
    Ok(Json(results))
}

async fn delete_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTopicResponse>, AppError> {
    let deleted = topics::delete_topic_by_id(&state.db, &id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(DeleteTopicResponse { deleted }))
}
