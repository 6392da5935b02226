use clap::Subcommand;

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// List reviews (all, or one course's).
    List {
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a review by ID.
    Get { id: String },
    /// Has the signed-in user reviewed this course?
    Check { course_id: String },
    /// Review a course.
    Add {
        course_id: String,
        /// 1 to 5
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Update your review.
    Update {
        course_id: String,
        id: String,
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete your review.
    Delete { course_id: String, id: String },
    /// Approve or reject a review (admins).
    Moderate {
        course_id: String,
        id: String,
        /// approved, rejected
        #[arg(long)]
        status: String,
        #[arg(long)]
        reason: Option<String>,
    },
}
