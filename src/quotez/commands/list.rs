use crate::commands::{CmdMessage, CmdResult, ListedPage};
use crate::error::Result;
use crate::store::{Listing, RecordStore, StorageBackend};

/// Show one page of the listing. `page` is 1-based; `None` means the first page.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, page: Option<usize>) -> Result<CmdResult> {
    let listing = Listing::new(store).find_all()?;
    let page_no = page.unwrap_or(1).max(1);

    let mut result = CmdResult::default();
    if listing.total_count() == 0 {
        result.add_message(CmdMessage::info("No quotes registered yet."));
    } else if page_no > listing.total_pages() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} does not exist (last page is {}).",
            page_no,
            listing.total_pages()
        )));
    }

    let listed = ListedPage {
        items: listing.page_items(page_no).to_vec(),
        page: page_no,
        total_pages: listing.total_pages(),
        total_count: listing.total_count(),
    };
    Ok(result.with_listed_page(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::StoreConfig;
    use crate::store::MemBackend;

    fn store_with(n: usize) -> RecordStore<MemBackend> {
        let store = RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap();
        store.make_sample_data(n).unwrap();
        store
    }

    #[test]
    fn first_page_by_default() {
        let store = store_with(7);
        let result = run(&store, None).unwrap();

        let listed = result.listed_page.unwrap();
        assert_eq!(listed.page, 1);
        assert_eq!(listed.items.len(), 5);
        assert_eq!(listed.total_pages, 2);
        assert_eq!(listed.total_count, 7);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn second_page_holds_remainder() {
        let store = store_with(7);
        let listed = run(&store, Some(2)).unwrap().listed_page.unwrap();

        let ids: Vec<u64> = listed.items.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![6, 7]);
    }

    #[test]
    fn page_past_the_end_warns() {
        let store = store_with(3);
        let result = run(&store, Some(4)).unwrap();

        assert!(result.listed_page.unwrap().items.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn empty_store_reports_info() {
        let store = store_with(0);
        let result = run(&store, None).unwrap();

        let listed = result.listed_page.unwrap();
        assert_eq!(listed.total_pages, 0);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }
}
