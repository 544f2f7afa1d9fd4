use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Exporter, RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let path = Exporter::new(store).build()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} has been updated.",
        path.display()
    )));
    Ok(result.with_artifact_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::store::MemBackend;
    use std::path::PathBuf;

    #[test]
    fn reports_artifact_location() {
        let store = RecordStore::open(MemBackend::new(), StoreConfig::new("quotes")).unwrap();
        store.make_sample_data(2).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(
            result.artifact_path,
            Some(PathBuf::from("memory://build/data.json"))
        );
        assert!(result.messages[0].content.contains("build/data.json"));
    }
}
