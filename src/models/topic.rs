use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Topic {
    pub id: String,
    pub week_number: i64,
    pub name: String,
}

/// A topic row joined with the name of the week it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TopicWithWeek {
    pub id: String,
    pub week_number: i64,
    pub name: String,
    pub week_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTopicRequest {
    pub week_number: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTopicRequest {
    pub week_number: Option<i64>,
    pub name: Option<String>,
}
