//! # lec-query
//!
//! Query/cache layer over the course API.
//!
//! - [`QueryKey`]: ordered string segments identifying one piece of server data
//! - [`QueryCache`]: process-wide keyed store with staleness, superseding
//!   fetch generations, and inactivity garbage collection
//! - [`Mutation`]: every write and the keys it invalidates
//! - [`QueryClient`]: typed query hooks (`course`, `module_progress`, ...) and
//!   mutation hooks (`add_review`, `enroll`, ...)
//! - [`Notifier`]: where mutation outcomes are reported
//!
//! Reads surface failures in [`QueryResult::error`]. Mutations log, notify,
//! and return `None` on failure.

mod cache;
mod client;
mod hooks;
mod key;
mod mutation;
mod notify;

pub use cache::{FetchTicket, QueryCache};
pub use client::{QueryClient, QueryResult};
pub use key::QueryKey;
pub use mutation::Mutation;
pub use notify::{BufferedNotifier, Notification, NotificationKind, Notifier, TracingNotifier};
