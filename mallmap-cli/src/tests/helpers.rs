//! Test helpers for staging rank requests on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory holding request files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write request file");
}

/// Request with an open mall, a closed store and an unlocated candidate.
pub(super) const MIXED_REQUEST: &str = r#"{
    "origin": {"lat": 13.7563, "lng": 100.5018},
    "rows": [
        {"id": "C"},
        {"id": "B", "coords": {"lat": 13.7462, "lng": 100.5347}, "kind": "store", "openNow": false},
        {"id": "A", "coords": {"lat": 13.6891, "lng": 100.5441}, "kind": "mall", "openNow": true}
    ]
}"#;

pub(super) fn ranked_ids(stdout: &[u8]) -> Vec<String> {
    let decoded: Vec<serde_json::Value> =
        serde_json::from_slice(stdout).expect("output should be a JSON array");
    decoded
        .iter()
        .map(|result| {
            result["id"]
                .as_str()
                .expect("result id should be a string")
                .to_owned()
        })
        .collect()
}
