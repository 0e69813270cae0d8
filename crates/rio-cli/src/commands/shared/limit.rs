/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` items.
pub fn truncate<T>(items: &mut Vec<T>, limit: u32) {
    items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
}

#[cfg(test)]
mod tests {
    use super::{effective_limit, truncate};

    #[test]
    fn global_flag_beats_config_default() {
        assert_eq!(effective_limit(None, Some(10), 50), 10);
        assert_eq!(effective_limit(None, None, 50), 50);
        assert_eq!(effective_limit(Some(2), Some(10), 50), 2);
    }

    #[test]
    fn truncate_keeps_prefix() {
        let mut items = vec![1, 2, 3];
        truncate(&mut items, 2);
        assert_eq!(items, vec![1, 2]);
        truncate(&mut items, 10);
        assert_eq!(items, vec![1, 2]);
    }
}
