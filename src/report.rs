use std::path::{Path, PathBuf};

use placeholder::{PlaceholderKey, PlaceholderTable, Substitution};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub key: PlaceholderKey,
    pub replaced: usize,
    pub defined: bool,
}

/// What one injection did, printed as JSON by `--report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionReport {
    pub file: PathBuf,
    pub keys: Vec<KeyReport>,
    /// Keys that occurred in the document but had no value, so were
    /// replaced with `undefined`.
    pub undefined: Vec<PlaceholderKey>,
}

impl InjectionReport {
    pub fn new<P: AsRef<Path>>(file: P, table: &PlaceholderTable, substitution: &Substitution) -> Self {
        let keys: Vec<KeyReport> = substitution
            .counts
            .iter()
            .map(|(key, replaced)| KeyReport {
                key: *key,
                replaced: *replaced,
                defined: table.get(*key).is_some(),
            })
            .collect();
        let undefined = keys
            .iter()
            .filter(|k| !k.defined && k.replaced > 0)
            .map(|k| k.key)
            .collect();
        Self { file: file.as_ref().to_path_buf(), keys, undefined }
    }

    pub fn total(&self) -> usize {
        self.keys.iter().map(|k| k.replaced).sum()
    }
}
