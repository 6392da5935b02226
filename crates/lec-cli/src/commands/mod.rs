pub mod announcement;
pub mod auth;
pub mod course;
pub mod dispatch;
pub mod enrollment;
pub mod lesson;
pub mod me;
pub mod module;
pub mod review;
pub mod shared;
