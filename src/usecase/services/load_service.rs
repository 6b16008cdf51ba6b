use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::bike::{Bike, REQUIRED_FIELDS};
use crate::usecase::ports::source::{CatalogSource, SourceError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("catalog resource unreachable: {source}")]
    Unreachable {
        #[source]
        source: SourceError,
    },

    #[error("catalog body is not valid JSON: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog failed validation: {reason}")]
    InvalidSchema { reason: String },
}

pub struct LoadService {
    source: Arc<dyn CatalogSource>,
}

impl LoadService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub fn load(&self) -> Result<Vec<Bike>, LoadError> {
        let body = self
            .source
            .fetch()
            .map_err(|source| LoadError::Unreachable { source })?;
        let records = parse_catalog(&body)?;
        Ok(records.into_iter().map(sanitize_record).collect())
    }
}

/// Parses and validates the whole catalog. Validation is all-or-nothing:
/// one bad record rejects the load, there is no per-record filtering.
pub fn parse_catalog(body: &str) -> Result<Vec<Bike>, LoadError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|source| LoadError::Malformed { source })?;
    let records: Vec<Bike> =
        serde_json::from_value(parsed).map_err(|err| invalid_schema(err.to_string()))?;

    let mut seen_ids = BTreeSet::new();
    for (idx, bike) in records.iter().enumerate() {
        for field in REQUIRED_FIELDS {
            if bike.text(field).filter(|text| !text.is_empty()).is_none() {
                return Err(invalid_schema(format!("record {idx} is missing {field}")));
            }
        }

        let id = bike.id();
        if !seen_ids.insert(id.clone()) {
            return Err(invalid_schema(format!("duplicate BikeID {id}")));
        }
    }

    Ok(records)
}

pub fn sanitize_record(bike: Bike) -> Bike {
    let fields = bike
        .into_fields()
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(text) => (name, Value::String(escape_markup(&text))),
            other => (name, other),
        })
        .collect();
    Bike::new(fields)
}

// Only `<` and `>` are rewritten; every other character passes through
// verbatim.
fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn invalid_schema(reason: impl Into<String>) -> LoadError {
    LoadError::InvalidSchema {
        reason: reason.into(),
    }
}
