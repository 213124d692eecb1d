use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Number, Value};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column, Connection, Row, TypeInfo, ValueRef};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::errors::store::StoreError;
use crate::models::metrics::ContainerMetricSample;
use crate::models::service::{ServiceStatus, ServiceStatusRecord};
use crate::repositories::status_store::{StatusStore, METRICS_HISTORY_LIMIT};

const LIST_SERVICE_STATUS: &str = "SELECT * FROM service_status";
const UPDATE_SERVICE_STATUS: &str =
    "UPDATE service_status SET status = ?, last_updated = NOW() WHERE service_name = ?";
const METRICS_HISTORY: &str = "SELECT cpu_usage, memory_usage, timestamp \
     FROM container_metrics \
     WHERE container_id = ? \
     ORDER BY timestamp DESC \
     LIMIT ?";

/// MySQL-backed store. Every call opens its own connection and closes it
/// once the single statement has run.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    options: MySqlConnectOptions,
    connect_timeout: Duration,
    query_timeout: Duration,
}

impl MySqlStore {
    pub fn new(config: &DatabaseConfig) -> MySqlStore {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        MySqlStore {
            options,
            connect_timeout: config.connect_timeout(),
            query_timeout: config.query_timeout(),
        }
    }

    async fn connect(&self) -> Result<MySqlConnection, StoreError> {
        match timeout(self.connect_timeout, MySqlConnection::connect_with(&self.options)).await {
            Ok(Ok(connection)) => Ok(connection),
            Ok(Err(e)) => {
                warn!(error = %e, "Database connection failed");
                Err(StoreError::ConnectionFailed {
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.connect_timeout.as_secs(),
                    "Database connection timed out"
                );
                Err(StoreError::Timeout {
                    operation: "connect".to_string(),
                    seconds: self.connect_timeout.as_secs(),
                })
            }
        }
    }

    async fn bounded<T, F>(&self, operation: &str, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match timeout(self.query_timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(%operation, error = %e, "Database query failed");
                Err(StoreError::QueryFailed {
                    operation: operation.to_string(),
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                warn!(
                    %operation,
                    timeout_secs = self.query_timeout.as_secs(),
                    "Database query timed out"
                );
                Err(StoreError::Timeout {
                    operation: operation.to_string(),
                    seconds: self.query_timeout.as_secs(),
                })
            }
        }
    }
}

async fn close_quietly(connection: MySqlConnection) {
    if let Err(e) = connection.close().await {
        debug!(error = %e, "Closing database connection failed");
    }
}

#[async_trait]
impl StatusStore for MySqlStore {
    async fn ping(&self) -> Result<(), StoreError> {
        let connection = self.connect().await?;
        close_quietly(connection).await;
        Ok(())
    }

    async fn list_service_status(&self) -> Result<Vec<ServiceStatusRecord>, StoreError> {
        let operation = "get service status";
        let mut connection = self.connect().await?;
        let rows = self
            .bounded(
                operation,
                sqlx::query(LIST_SERVICE_STATUS).fetch_all(&mut connection),
            )
            .await;
        close_quietly(connection).await;

        let rows = rows?;
        rows.iter()
            .map(|row| {
                service_record_from_row(row).map_err(|e| StoreError::QueryFailed {
                    operation: operation.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    async fn update_service_status(
        &self,
        service_name: &str,
        status: ServiceStatus,
    ) -> Result<u64, StoreError> {
        let mut connection = self.connect().await?;
        let result = self
            .bounded(
                "update service status",
                sqlx::query(UPDATE_SERVICE_STATUS)
                    .bind(status.as_str())
                    .bind(service_name)
                    .execute(&mut connection),
            )
            .await;
        close_quietly(connection).await;

        let rows_affected = result?.rows_affected();
        debug!(%service_name, %status, rows_affected, "Service status updated");
        Ok(rows_affected)
    }

    async fn metrics_history(
        &self,
        container_id: &str,
    ) -> Result<Vec<ContainerMetricSample>, StoreError> {
        let operation = "get metrics history";
        let mut connection = self.connect().await?;
        let rows = self
            .bounded(
                operation,
                sqlx::query(METRICS_HISTORY)
                    .bind(container_id)
                    .bind(METRICS_HISTORY_LIMIT as u64)
                    .fetch_all(&mut connection),
            )
            .await;
        close_quietly(connection).await;

        let rows = rows?;
        rows.iter()
            .map(|row| {
                metric_sample_from_row(row).map_err(|e| StoreError::QueryFailed {
                    operation: operation.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

fn service_record_from_row(row: &MySqlRow) -> Result<ServiceStatusRecord, sqlx::Error> {
    // Outer None: column absent. Inner None: NULL cell.
    let mut service_name: Option<Option<String>> = None;
    let mut status: Option<Option<String>> = None;
    let mut last_updated = None;
    let mut extra = Map::new();

    for column in row.columns() {
        let ordinal = column.ordinal();
        match column.name() {
            "service_name" => service_name = Some(row.try_get::<Option<String>, _>(ordinal)?),
            "status" => status = Some(row.try_get_unchecked::<Option<String>, _>(ordinal)?),
            "last_updated" => last_updated = decode_datetime(row, ordinal)?,
            name => {
                extra.insert(name.to_string(), column_to_json(row, ordinal));
            }
        }
    }

    Ok(ServiceStatusRecord {
        service_name: service_name
            .ok_or_else(|| sqlx::Error::ColumnNotFound("service_name".to_string()))?,
        status: status.ok_or_else(|| sqlx::Error::ColumnNotFound("status".to_string()))?,
        last_updated,
        extra,
    })
}

fn metric_sample_from_row(row: &MySqlRow) -> Result<ContainerMetricSample, sqlx::Error> {
    Ok(ContainerMetricSample {
        cpu_usage: decode_number(row, 0)?,
        memory_usage: decode_number(row, 1)?,
        timestamp: decode_datetime(row, 2)?,
    })
}

fn decode_number(row: &MySqlRow, ordinal: usize) -> Result<Option<f64>, sqlx::Error> {
    if row.try_get_raw(ordinal)?.is_null() {
        return Ok(None);
    }
    if let Ok(value) = row.try_get::<f64, _>(ordinal) {
        return Ok(Some(value));
    }
    if let Ok(value) = row.try_get::<f32, _>(ordinal) {
        return Ok(Some(f64::from(value)));
    }
    if let Ok(value) = row.try_get::<i64, _>(ordinal) {
        return Ok(Some(value as f64));
    }

    // DECIMAL arrives as text.
    let text = row.try_get_unchecked::<String, _>(ordinal)?;
    parse_decimal(&text)
        .map(Some)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: ordinal.to_string(),
            source: Box::new(e),
        })
}

fn parse_decimal(text: &str) -> Result<f64, std::num::ParseFloatError> {
    text.trim().parse::<f64>()
}

fn decode_datetime(row: &MySqlRow, ordinal: usize) -> Result<Option<NaiveDateTime>, sqlx::Error> {
    match row.try_get::<Option<NaiveDateTime>, _>(ordinal) {
        Ok(value) => Ok(value),
        Err(_) => row
            .try_get::<Option<DateTime<Utc>>, _>(ordinal)
            .map(|value| value.map(|v| v.naive_utc())),
    }
}

/// Best-effort JSON rendering of an arbitrary column.
fn column_to_json(row: &MySqlRow, ordinal: usize) -> Value {
    match row.try_get_raw(ordinal) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(_) => {}
        Err(_) => return Value::Null,
    }

    let type_name = row.column(ordinal).type_info().name().to_ascii_uppercase();
    let typed = match type_name.as_str() {
        "BOOLEAN" => row.try_get::<bool, _>(ordinal).ok().map(Value::Bool),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<i64, _>(ordinal).ok().map(Value::from)
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row.try_get::<u64, _>(ordinal).ok().map(Value::from),
        "FLOAT" => row
            .try_get::<f32, _>(ordinal)
            .ok()
            .and_then(|v| Number::from_f64(f64::from(v)))
            .map(Value::Number),
        "DOUBLE" => row
            .try_get::<f64, _>(ordinal)
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        "DATETIME" => row
            .try_get::<NaiveDateTime, _>(ordinal)
            .ok()
            .and_then(|v| serde_json::to_value(v).ok()),
        "TIMESTAMP" => row
            .try_get::<DateTime<Utc>, _>(ordinal)
            .ok()
            .and_then(|v| serde_json::to_value(v.naive_utc()).ok()),
        "DATE" => row
            .try_get::<NaiveDate, _>(ordinal)
            .ok()
            .and_then(|v| serde_json::to_value(v).ok()),
        "TIME" => row
            .try_get::<NaiveTime, _>(ordinal)
            .ok()
            .and_then(|v| serde_json::to_value(v).ok()),
        _ => None,
    };

    typed
        .or_else(|| {
            row.try_get_unchecked::<String, _>(ordinal)
                .ok()
                .map(Value::String)
        })
        .unwrap_or(Value::Null)
}
