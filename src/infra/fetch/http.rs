use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::usecase::ports::source::{CatalogSource, SourceError};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl CatalogSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|err| SourceError::new(format!("request to {} failed: {err}", self.url)))?
            .error_for_status()
            .map_err(|err| SourceError::new(format!("request to {} failed: {err}", self.url)))?;

        response
            .text()
            .map_err(|err| SourceError::new(format!("failed to read body from {}: {err}", self.url)))
    }
}
