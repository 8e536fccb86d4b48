// Text-art images for the terminal host

use crate::error::Result;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Images keyed by name, each a block of text rows
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: FxHashMap<String, Vec<String>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<name>.txt` file in `dir` as image `name`
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut store = ImageStore::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let art = fs::read_to_string(&path)?;
            debug!(name, path = %path.display(), "loaded image");
            store.insert(name, &art);
        }
        Ok(store)
    }

    pub fn insert(&mut self, name: &str, art: &str) {
        let rows = art.lines().map(|row| row.trim_end().to_string()).collect();
        self.images.insert(name.to_string(), rows);
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.images.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
