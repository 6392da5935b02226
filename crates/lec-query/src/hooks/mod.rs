//! Typed query and mutation hooks, one module per resource.
//!
//! Query hooks take their ids as `Option<&str>`; a missing or blank id
//! disables the query (no request, [`QueryResult::disabled`]). Mutation
//! hooks reject a blank id with an error notification instead of sending.
//!
//! [`QueryResult::disabled`]: crate::QueryResult::disabled

mod announcements;
mod courses;
mod enrollments;
mod lessons;
mod modules;
mod reviews;
mod users;

/// `id` if it is present and not blank.
pub(crate) fn required(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.trim().is_empty())
}

/// Blank-id check for mutations; the error reads as a notification detail.
pub(crate) fn require<'a>(id: &'a str, what: &str) -> Result<&'a str, String> {
    if id.trim().is_empty() {
        Err(format!("{what} id is required"))
    } else {
        Ok(id)
    }
}

/// [`require`] over several ids, reporting the first blank one. Mutations
/// check the ids that pick their invalidation keys as well as the target.
pub(crate) fn require_all(ids: &[(&str, &str)]) -> Result<(), String> {
    for (id, what) in ids {
        require(id, what)?;
    }
    Ok(())
}
