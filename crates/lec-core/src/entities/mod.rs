//! Records returned by the remote course API.
//!
//! The API speaks camelCase JSON. Every struct derives `Serialize`,
//! `Deserialize`, and `JsonSchema` so fixtures can be round-tripped and
//! validated in tests. Records are snapshots: the client never edits them
//! in place.

mod announcement;
mod course;
mod enrollment;
mod lesson;
mod module;
mod review;
mod user;

pub use announcement::Announcement;
pub use course::Course;
pub use enrollment::Enrollment;
pub use lesson::Lesson;
pub use module::{Module, ModuleProgress};
pub use review::{Review, ReviewCheck};
pub use user::User;
