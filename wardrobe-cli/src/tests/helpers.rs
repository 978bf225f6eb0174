//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Fixed reference date used instead of the local clock.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
    write_utf8(path, &payload);
}

/// Temporary directory holding a `request.json` path.
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) request_path: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            request_path: root.join("request.json"),
            _tmp: tmp,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        self.request_path.parent().expect("request path has a parent")
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("request_path", &self.request_path)
            .finish_non_exhaustive()
    }
}

/// A small wardrobe spanning several packing categories.
pub(super) fn sample_items() -> Value {
    json!([
        {"id": "linen-shirt", "name": "Linen shirt", "category": "tops",
         "season": ["summer"], "formality": 2, "timesWorn": 4, "lastWornAt": "2026-08-01"},
        {"id": "wool-jumper", "name": "Wool jumper", "category": "tops",
         "season": ["fall", "winter"], "formality": 3, "timesWorn": 12, "lastWornAt": "2026-10-16"},
        {"id": "oxford", "name": "Oxford shirt", "category": "tops",
         "season": [], "formality": 4, "timesWorn": 0, "lastWornAt": null},
        {"id": "chinos", "name": "Chinos", "category": "bottoms",
         "season": ["spring", "fall"], "formality": 3, "timesWorn": 20},
        {"id": "trainers", "name": "Trainers", "category": "shoes",
         "season": [], "formality": 1, "timesWorn": 30, "lastWornAt": "2026-10-18"},
        {"id": "camera", "name": "Camera", "category": "gadgets"}
    ])
}
