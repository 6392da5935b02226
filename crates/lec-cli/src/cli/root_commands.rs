use clap::Subcommand;

use crate::cli::subcommands::{
    AnnouncementCommands, AuthCommands, CourseCommands, EnrollmentCommands, LessonCommands,
    ModuleCommands, ReviewCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the signed-in user's profile.
    Me,
    /// Session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse and manage courses.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Enrollments and payment.
    Enrollment {
        #[command(subcommand)]
        action: EnrollmentCommands,
    },
    /// Course modules and progress.
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },
    /// Lessons.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Course reviews.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Course and global announcements.
    Announcement {
        #[command(subcommand)]
        action: AnnouncementCommands,
    },
}
