//! RecordSource over JSON rows, as returned by the hosted backend

use crate::core::{Record, RecordSource};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::path::PathBuf;

enum Rows {
    Inline(Value),
    File(PathBuf),
}

/// Record source that decodes a JSON array of rows into records
///
/// Rows are decoded on every fetch, so a file-backed source picks up edits
/// between page loads.
pub struct JsonRecordSource<R> {
    rows: Rows,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonRecordSource<R> {
    /// Serve rows already fetched into a JSON value
    pub fn from_value(rows: Value) -> Self {
        Self {
            rows: Rows::Inline(rows),
            _record: PhantomData,
        }
    }

    /// Serve rows from a JSON file on disk
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            rows: Rows::File(path.into()),
            _record: PhantomData,
        }
    }
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<Vec<R>> {
    let Value::Array(rows) = value else {
        return Err(anyhow!("expected a JSON array of rows"));
    };
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| serde_json::from_value(row).with_context(|| format!("invalid row {}", i)))
        .collect()
}

#[async_trait]
impl<R> RecordSource<R> for JsonRecordSource<R>
where
    R: Record + DeserializeOwned,
{
    async fn fetch_all(&self) -> Result<Vec<R>> {
        let value = match &self.rows {
            Rows::Inline(value) => value.clone(),
            Rows::File(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
        };
        decode(value)
    }
}
