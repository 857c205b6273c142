use crate::error::ShopError;
use serde::Serialize;

/// One page of a list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Slices out a 1-based page. Page 0 is read as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Result<Page<T>, ShopError> {
    if per_page == 0 {
        return Err(ShopError::InvalidPageSize);
    }
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let page_items = if start >= total_items {
        Vec::new()
    } else {
        let end = (start + per_page).min(total_items);
        items[start..end].to_vec()
    };

    Ok(Page {
        items: page_items,
        page,
        per_page,
        total_items,
        total_pages,
    })
}

/// Case-insensitive substring filter. A blank query keeps everything.
pub fn filter_by_text<'a, T, F>(items: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> String,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| key(item).to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages() {
        let items: Vec<u32> = (1..=23).collect();
        let page = paginate(&items, 3, 10).unwrap();
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total_items, 23);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn page_zero_reads_as_first() {
        let items = vec!["a", "b", "c"];
        let page = paginate(&items, 0, 2).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec!["a", "b"]);
        assert!(page.has_next());
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = vec![1, 2, 3];
        let page = paginate(&items, 5, 2).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);

        let empty: Vec<i32> = Vec::new();
        let page = paginate(&empty, 1, 10).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(paginate(&[1], 1, 0), Err(ShopError::InvalidPageSize)));
    }

    #[test]
    fn filter_ignores_case_and_blank_query() {
        let names = vec!["Oil change".to_string(), "Brake pads".to_string(), "OIL filter".to_string()];
        let hits = filter_by_text(&names, " oil ", |n| n.clone());
        assert_eq!(hits.len(), 2);
        assert_eq!(filter_by_text(&names, "   ", |n| n.clone()).len(), 3);
        assert!(filter_by_text(&names, "clutch", |n| n.clone()).is_empty());
    }
}
