/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` items. The API has no paging, so lists are cut client-side.
#[must_use]
pub fn take_limited<T: Clone>(items: &[T], limit: u32) -> Vec<T> {
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    items.iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, take_limited};

    #[test]
    fn local_takes_precedence() {
        assert_eq!(effective_limit(Some(5), Some(10), 20), 5);
    }

    #[test]
    fn global_used_when_local_missing() {
        assert_eq!(effective_limit(None, Some(10), 20), 10);
    }

    #[test]
    fn fallback_used_when_none_set() {
        assert_eq!(effective_limit(None, None, 20), 20);
    }

    #[test]
    fn take_limited_cuts_and_keeps_order() {
        assert_eq!(take_limited(&[1, 2, 3, 4], 2), vec![1, 2]);
        assert_eq!(take_limited(&[1, 2], 10), vec![1, 2]);
    }
}
