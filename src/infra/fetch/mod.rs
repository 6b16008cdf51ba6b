pub mod file;
pub mod http;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::infra::fetch::file::FileSource;
use crate::infra::fetch::http::HttpSource;
use crate::usecase::ports::source::CatalogSource;

pub fn catalog_source_for(location: &str) -> Result<Arc<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpSource::new(location)?))
    } else {
        Ok(Arc::new(FileSource::new(PathBuf::from(location))))
    }
}
