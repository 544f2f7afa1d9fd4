use serde::{Deserialize, Serialize};

/// Items per page unless the store config says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A single quote. An `id` of 0 marks a quote that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub content: String,
    pub author: String,
}

impl Quote {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_id(0, content, author)
    }

    pub fn with_id(id: u64, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            author: author.into(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// The full listing of quotes plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    quotes: Vec<Quote>,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl Page {
    /// A `page_size` of 0 is treated as 1.
    pub fn new(quotes: Vec<Quote>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_count = quotes.len();
        Self {
            total_pages: total_count.div_ceil(page_size),
            quotes,
            page_size,
            total_count,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Items of the 1-based page `page`. Empty when out of range.
    pub fn page_items(&self, page: usize) -> &[Quote] {
        if page == 0 || page > self.total_pages {
            return &[];
        }
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.total_count);
        &self.quotes[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(n: u64) -> Vec<Quote> {
        (1..=n)
            .map(|i| Quote::with_id(i, format!("c{}", i), format!("a{}", i)))
            .collect()
    }

    #[test]
    fn new_quote_has_no_id() {
        let q = Quote::new("aaa", "bbb");
        assert!(q.is_new());
        assert!(!Quote::with_id(3, "aaa", "bbb").is_new());
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = Quote::with_id(1, "aaa", "bbb");
        assert_eq!(a, Quote::with_id(1, "aaa", "bbb"));
        assert_ne!(a, Quote::with_id(2, "aaa", "bbb"));
        assert_ne!(a, Quote::with_id(1, "aaa", "ccc"));
    }

    #[test]
    fn serializes_with_exactly_three_fields() {
        let json = serde_json::to_value(Quote::with_id(7, "aaa", "bbb")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["content"], "aaa");
        assert_eq!(obj["author"], "bbb");
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Page::new(quotes(0), 5).total_pages(), 0);
        assert_eq!(Page::new(quotes(1), 5).total_pages(), 1);
        assert_eq!(Page::new(quotes(5), 5).total_pages(), 1);
        assert_eq!(Page::new(quotes(6), 5).total_pages(), 2);
        assert_eq!(Page::new(quotes(6), 5).total_count(), 6);
    }

    #[test]
    fn page_items_slices_by_page() {
        let page = Page::new(quotes(7), 5);
        assert_eq!(page.page_items(1).len(), 5);
        assert_eq!(page.page_items(2).len(), 2);
        assert_eq!(page.page_items(2)[0].id, 6);
        assert!(page.page_items(0).is_empty());
        assert!(page.page_items(3).is_empty());
    }
}
