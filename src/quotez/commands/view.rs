use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.find_by_id(id)? {
        Some(quote) => Ok(result.with_affected_quotes(vec![quote])),
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Quote #{} does not exist.",
                id
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::model::Quote;
    use crate::store::MemBackend;

    #[test]
    fn shows_existing_quote() {
        let store = RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap();
        let saved = store.save(Quote::new("aaa", "bbb")).unwrap();

        let result = run(&store, saved.id).unwrap();
        assert_eq!(result.affected_quotes, vec![saved]);
    }

    #[test]
    fn missing_quote_warns() {
        let store = RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap();

        let result = run(&store, 5).unwrap();
        assert!(result.affected_quotes.is_empty());
        assert_eq!(result.messages[0].content, "Quote #5 does not exist.");
    }
}
