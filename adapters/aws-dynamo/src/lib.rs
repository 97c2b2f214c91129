//! DynamoDB adapter implementing the `CoachRepository` port.
//!
//! - Reads coach items from a single table keyed by `pk` (team#position)
//!   and `sk` (season year), both string attributes.
//! - Only ever issues `GetItem`; this crate never writes.
//!
//! Notes:
//! - The domain `CoachRepository` trait is synchronous. We bridge to the async
//!   AWS SDK using `block_in_place` inside an existing runtime, or an owned
//!   `tokio::runtime::Runtime` when used standalone.

use aws_sdk_dynamodb::{types::AttributeValue, Client};
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use domain::{CoachKey, CoachRecord, CoachRepository, CoreError};
use std::collections::HashMap;

/// Environment variable naming the coach table, read by the app config.
pub const TABLE_ENV: &str = "CoachData_table";

const ATTR_PK: &str = "pk";
const ATTR_SK: &str = "sk";
const ATTR_COACH: &str = "Coach";

/// Repository backed by AWS DynamoDB.
///
/// Supports both standalone mode (creates its own Tokio runtime) and Lambda mode
/// (reuses the existing runtime via `Handle::current()`).
#[derive(Clone)]
pub struct DynamoCoachRepo {
    table: String,
    client: Client,
    // None when running inside Lambda (reuses existing runtime)
    rt: Option<std::sync::Arc<tokio::runtime::Runtime>>,
}

impl DynamoCoachRepo {
    /// Construct with a table name but create a default AWS SDK client using env/IMDS.
    pub fn new(table: impl Into<String>) -> Result<Self, CoreError> {
        let rt = Self::maybe_create_runtime()?;
        let conf = Self::block_on_with_rt(
            &rt,
            aws_config::load_defaults(aws_config::BehaviorVersion::latest()),
        );
        let client = Client::new(&conf);
        Ok(Self {
            table: table.into(),
            client,
            rt,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Check if we're inside a Tokio runtime. If yes, return None (reuse existing).
    /// If no, create a new runtime.
    fn maybe_create_runtime() -> Result<Option<std::sync::Arc<tokio::runtime::Runtime>>, CoreError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            Ok(None)
        } else {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .map_err(|e| CoreError::Repository(format!("tokio runtime init: {e}")))?;
            Ok(Some(std::sync::Arc::new(rt)))
        }
    }

    fn block_on<F: std::future::Future>(&self, fut: F) -> F::Output {
        Self::block_on_with_rt(&self.rt, fut)
    }

    fn block_on_with_rt<F: std::future::Future>(
        rt: &Option<std::sync::Arc<tokio::runtime::Runtime>>,
        fut: F,
    ) -> F::Output {
        match rt {
            Some(rt) => rt.block_on(fut),
            None => tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(fut)),
        }
    }
}

impl CoachRepository for DynamoCoachRepo {
    fn get(&self, key: &CoachKey) -> Result<Option<CoachRecord>, CoreError> {
        let table = self.table.clone();
        let fut = async {
            self.client
                .get_item()
                .table_name(table)
                .set_key(Some(key_to_attrs(key)))
                .send()
                .await
        };
        let out = self.block_on(fut).map_err(map_sdk_err)?;
        match out.item() {
            Some(item) => Ok(Some(item_to_record(key, item))),
            None => Ok(None),
        }
    }
}

fn map_sdk_err<E: ProvideErrorMetadata + std::fmt::Display>(e: E) -> CoreError {
    let message = e.message().map(str::to_string).unwrap_or_else(|| e.to_string());
    match e.code() {
        Some(code @ "ResourceNotFoundException") => {
            CoreError::Repository(format!("dynamo error {code}: missing table ({message})"))
        }
        Some(code) => CoreError::Repository(format!("dynamo error {code}: {message}")),
        None => CoreError::Repository(format!("dynamo error: {message}")),
    }
}

fn key_to_attrs(key: &CoachKey) -> HashMap<String, AttributeValue> {
    let mut m = HashMap::new();
    m.insert(ATTR_PK.into(), AttributeValue::S(key.partition().to_string()));
    m.insert(ATTR_SK.into(), AttributeValue::S(key.sort().to_string()));
    m
}

/// Map a fetched item to a record. The requested key fills in `pk`/`sk`
/// when a projection left them out; a missing or non-string `Coach` maps to
/// `None`.
fn item_to_record(key: &CoachKey, item: &HashMap<String, AttributeValue>) -> CoachRecord {
    let partition = item
        .get(ATTR_PK)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.partition().to_string());
    let sort = item
        .get(ATTR_SK)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.sort().to_string());
    let coach = item
        .get(ATTR_COACH)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string());
    CoachRecord { partition, sort, coach }
}
