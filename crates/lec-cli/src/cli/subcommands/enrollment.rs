use clap::Subcommand;

/// Enrollment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnrollmentCommands {
    /// List the signed-in user's enrollments.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show enrollment status and available actions for a course.
    Show { course_id: String },
    /// Enroll in a course.
    Enroll { course_id: String },
    /// Cancel the enrollment in a course.
    Cancel { course_id: String },
    /// Confirm payment for a pending enrollment.
    Pay {
        course_id: String,
        /// Reference returned by the payment provider.
        #[arg(long)]
        reference: String,
    },
}
