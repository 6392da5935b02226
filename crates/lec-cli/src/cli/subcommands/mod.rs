mod announcement;
mod auth;
mod course;
mod enrollment;
mod lesson;
mod module;
mod review;

pub use announcement::AnnouncementCommands;
pub use auth::AuthCommands;
pub use course::CourseCommands;
pub use enrollment::EnrollmentCommands;
pub use lesson::LessonCommands;
pub use module::ModuleCommands;
pub use review::ReviewCommands;
