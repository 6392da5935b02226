use clap::Subcommand;

/// Announcement commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnnouncementCommands {
    /// List announcements.
    List {
        #[arg(long, conflicts_with = "global")]
        course: Option<String>,
        /// Only announcements not tied to a course.
        #[arg(long)]
        global: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an announcement.
    Get { id: String },
    /// Publish an announcement (omit --course for a global one).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        course: Option<String>,
    },
    /// Delete an announcement.
    Delete {
        id: String,
        /// Course the announcement belongs to, if any.
        #[arg(long)]
        course: Option<String>,
    },
}
