use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// List published courses.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// beginner, intermediate, advanced
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a course with the caller's enrollment panel.
    Get { id: String },
    /// List courses the signed-in instructor owns.
    Mine,
    /// Create a course (instructors).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        level: Option<String>,
        /// Require modules to be completed in order.
        #[arg(long)]
        sequential: bool,
    },
    /// Update a course.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        level: Option<String>,
    },
    /// Delete a course.
    Delete { id: String },
    /// Publish a draft course.
    Publish { id: String },
}
