//! Pure view models computed from query results.
//!
//! Nothing here fetches. Each function maps server-reported status onto a
//! small fixed state machine; transitions happen only when a refetch
//! reports a new status.

pub mod enrollment;
pub mod module_progress;
pub mod navigation;

pub use enrollment::{EnrollmentAction, EnrollmentView, enrollment_panel};
pub use module_progress::{ModuleRow, module_rows};
pub use navigation::{Route, resume_module, resume_route, route_for};
