use std::fs;
use std::path::PathBuf;

use crate::usecase::ports::source::{CatalogSource, SourceError};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).map_err(|err| {
            SourceError::new(format!("failed to read {}: {err}", self.path.display()))
        })
    }
}
