use std::sync::Arc;

use anyhow::Context;
use lec_query::QueryResult;

/// Unwrap a read. Fetch errors surface with context; a query disabled by a
/// blank id is reported as such.
pub fn loaded<T>(result: QueryResult<T>, what: &str) -> anyhow::Result<Arc<T>> {
    let disabled = result.is_disabled();
    let data = result
        .into_result()
        .with_context(|| format!("failed to load {what}"))?;
    match data {
        Some(data) => Ok(data),
        None if disabled => anyhow::bail!("cannot load {what}: id is empty"),
        None => anyhow::bail!("no {what} returned"),
    }
}

/// Unwrap a mutation. The failure itself was already reported through the
/// notifier; this only turns it into a non-zero exit.
pub fn completed<T>(outcome: Option<T>, what: &str) -> anyhow::Result<T> {
    outcome.ok_or_else(|| anyhow::anyhow!("{what} did not complete"))
}

#[cfg(test)]
mod tests {
    use lec_query::QueryResult;

    use super::{completed, loaded};

    #[test]
    fn disabled_query_names_the_missing_id() {
        let err = loaded::<u32>(QueryResult::disabled(), "course").expect_err("disabled");
        assert!(err.to_string().contains("id is empty"));
    }

    #[test]
    fn swallowed_mutation_becomes_an_error() {
        let err = completed::<u32>(None, "enrollment").expect_err("none");
        assert_eq!(err.to_string(), "enrollment did not complete");
        assert_eq!(completed(Some(3), "x").expect("some"), 3);
    }
}
