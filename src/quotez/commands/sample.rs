use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, count: usize) -> Result<CmdResult> {
    let made = store.make_sample_data(count)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} sample quotes created.",
        made.len()
    )));
    Ok(result.with_affected_quotes(made))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::store::MemBackend;

    #[test]
    fn creates_requested_number() {
        let store = RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap();

        let result = run(&store, 10).unwrap();
        assert_eq!(result.affected_quotes.len(), 10);
        assert_eq!(store.last_id().unwrap(), 10);
        assert_eq!(result.messages[0].content, "10 sample quotes created.");
    }
}
