use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Week {
    pub number: i64,
    pub name: String,
    pub instructor_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWeekRequest {
    pub number: i64,
    pub name: String,
    pub instructor_id: i64,
}
