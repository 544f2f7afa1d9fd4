use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.delete_by_id(id)? {
        result.add_message(CmdMessage::success(format!("Quote #{} deleted.", id)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Quote #{} does not exist.",
            id
        )));
    }
    Ok(result)
}
