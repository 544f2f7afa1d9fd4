use crate::commands::{required_field, CmdMessage, CmdResult, QuoteUpdate};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    id: u64,
    update: QuoteUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(mut quote) = store.find_by_id(id)? else {
        result.add_message(CmdMessage::warning(format!(
            "Quote #{} does not exist.",
            id
        )));
        return Ok(result);
    };

    if let Some(content) = update.content {
        quote.content = required_field("Content", &content)?;
    }
    if let Some(author) = update.author {
        quote.author = required_field("Author", &author)?;
    }

    let saved = store.save(quote)?;
    result.add_message(CmdMessage::success(format!(
        "Quote #{} modified.",
        saved.id
    )));
    Ok(result.with_affected_quotes(vec![saved]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::model::Quote;
    use crate::store::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap()
    }

    #[test]
    fn updates_given_fields_only() {
        let store = store();
        let saved = store.save(Quote::new("old words", "someone")).unwrap();

        run(
            &store,
            saved.id,
            QuoteUpdate::new(Some("new words".into()), None),
        )
        .unwrap();

        let stored = store.find_by_id(saved.id).unwrap().unwrap();
        assert_eq!(stored, Quote::with_id(saved.id, "new words", "someone"));
    }

    #[test]
    fn keeps_id_and_allocator() {
        let store = store();
        let saved = store.save(Quote::new("a", "b")).unwrap();

        let result = run(
            &store,
            saved.id,
            QuoteUpdate::new(Some("c".into()), Some("d".into())),
        )
        .unwrap();

        assert_eq!(result.affected_quotes[0].id, saved.id);
        assert_eq!(store.last_id().unwrap(), 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn missing_quote_warns_and_writes_nothing() {
        let store = store();
        let result = run(&store, 3, QuoteUpdate::new(Some("x".into()), None)).unwrap();

        assert!(result.affected_quotes.is_empty());
        assert_eq!(result.messages[0].content, "Quote #3 does not exist.");
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn rejects_blank_replacement() {
        let store = store();
        let saved = store.save(Quote::new("a", "b")).unwrap();

        assert!(run(&store, saved.id, QuoteUpdate::new(None, Some(" ".into()))).is_err());
        assert_eq!(store.find_by_id(saved.id).unwrap(), Some(saved));
    }
}
