use clap::Subcommand;

/// Module commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModuleCommands {
    /// Course outline with per-module progress.
    List { course_id: String },
    /// Get a module.
    Get { id: String },
    /// Mark a module completed.
    Complete { course_id: String, module_id: String },
    /// Where to resume a course.
    Next { course_id: String },
}
