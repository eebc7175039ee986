use crate::repositories::Pagination;

/// Applies the pagination window to an already ordered sequence.
pub fn paginate<T>(items: impl IntoIterator<Item = T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let skipped = items.into_iter().skip(offset);
    match pagination.limit {
        Some(limit) => skipped.take(limit as usize).collect(),
        None => skipped.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_applied_in_order() {
        let items = vec![1, 2, 3, 4, 5];
        let pagination = Pagination {
            offset: Some(1),
            limit: Some(2),
        };
        assert_eq!(paginate(items, &pagination), vec![2, 3]);
    }

    #[test]
    fn missing_bounds_keep_everything() {
        let items = vec![1, 2, 3];
        assert_eq!(paginate(items, &Pagination::default()), vec![1, 2, 3]);
    }

    #[test]
    fn window_beyond_the_end_is_empty() {
        let items = vec![1, 2, 3];
        let pagination = Pagination {
            offset: Some(10),
            limit: Some(5),
        };
        assert!(paginate(items, &pagination).is_empty());
    }
}
