pub mod instructor;
pub mod topic;
pub mod week;

pub use instructor::{Instructor, NewInstructorRequest, UpdateInstructorRequest};
pub use topic::{NewTopicRequest, Topic, TopicWithWeek, UpdateTopicRequest};
pub use week::{NewWeekRequest, Week};
