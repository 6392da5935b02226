use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// List a module's lessons.
    List { module_id: String },
    /// Get a lesson.
    Get { id: String },
    /// Mark a lesson completed.
    Complete {
        course_id: String,
        module_id: String,
        lesson_id: String,
    },
}
