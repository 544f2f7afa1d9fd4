use crate::commands::{required_field, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Quote;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    content: String,
    author: String,
) -> Result<CmdResult> {
    let content = required_field("Content", &content)?;
    let author = required_field("Author", &author)?;

    let quote = store.save(Quote::new(content, author))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Quote #{} registered.",
        quote.id
    )));
    Ok(result.with_affected_quotes(vec![quote]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::error::QuotezError;
    use crate::store::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap()
    }

    #[test]
    fn registers_quote_with_next_id() {
        let store = store();
        let result = run(&store, "Be yourself".into(), "Oscar Wilde".into()).unwrap();

        assert_eq!(result.affected_quotes.len(), 1);
        assert_eq!(result.affected_quotes[0].id, 1);
        assert_eq!(result.messages[0].content, "Quote #1 registered.");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn trims_fields() {
        let store = store();
        let result = run(&store, "  spaced  ".into(), " me ".into()).unwrap();

        let stored = store.find_by_id(result.affected_quotes[0].id).unwrap().unwrap();
        assert_eq!(stored.content, "spaced");
        assert_eq!(stored.author, "me");
    }

    #[test]
    fn rejects_blank_content() {
        let store = store();
        let err = run(&store, "   ".into(), "someone".into()).unwrap_err();

        assert!(matches!(err, QuotezError::Api(_)));
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(store.last_id().unwrap(), 0);
    }

    #[test]
    fn rejects_blank_author() {
        let store = store();
        assert!(run(&store, "words".into(), "".into()).is_err());
    }
}
