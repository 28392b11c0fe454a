//! MySQL client implementation
//!
//! Wraps `mysql_async` behind the [`SourceReader`] trait. Each table is
//! read with a single `SELECT *` and materialized into domain rows;
//! driver values are converted to [`SourceValue`] at this boundary.

use crate::adapters::traits::SourceReader;
use crate::config::MySqlConfig;
use crate::domain::{Result, SourceError, SourceRow, SourceValue};
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use mysql_async::prelude::Queryable;
use mysql_async::{Opts, Pool};
use secrecy::ExposeSecret;

/// MySQL source client
///
/// Holds a connection pool for the duration of the run. The pool is
/// acquired once at start and must be released with [`MySqlClient::close`]
/// at the end of the run. Clones share the pool.
#[derive(Clone)]
pub struct MySqlClient {
    pool: Pool,
    url_safe: String,
}

impl MySqlClient {
    /// Create a new MySQL client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the connection URL is invalid.
    pub fn new(config: &MySqlConfig) -> Result<Self> {
        let opts = Opts::from_url(config.url.expose_secret().as_ref())
            .map_err(|e| SourceError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            pool: Pool::new(opts),
            url_safe: config.url_safe(),
        })
    }

    /// Test the connection with a trivial query
    pub async fn test_connection(&self) -> Result<()> {
        let mut conn = self
            .pool
            .get_conn()
            .await
            .map_err(|e| SourceError::ConnectionFailed(e.to_string()))?;

        conn.query_first::<i64, _>("SELECT 1")
            .await
            .map_err(|e| SourceError::ConnectionFailed(e.to_string()))?;

        tracing::info!(url = %self.url_safe, "MySQL connection test successful");
        Ok(())
    }

    /// Disconnect the pool
    ///
    /// Called in the run teardown path regardless of outcome.
    pub async fn close(self) -> Result<()> {
        self.pool
            .disconnect()
            .await
            .map_err(|e| SourceError::DisconnectFailed(e.to_string()))?;
        Ok(())
    }

    /// Connection URL with credentials redacted
    pub fn url_safe(&self) -> &str {
        &self.url_safe
    }
}

#[async_trait]
impl SourceReader for MySqlClient {
    async fn fetch_table(&self, table: &str) -> Result<Vec<SourceRow>> {
        let mut conn = self
            .pool
            .get_conn()
            .await
            .map_err(|e| SourceError::ConnectionFailed(e.to_string()))?;

        let query = format!("SELECT * FROM {table}");
        let rows: Vec<mysql_async::Row> =
            conn.query(query).await.map_err(|e| SourceError::QueryFailed {
                table: table.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(table = %table, count = rows.len(), "Fetched source rows");

        Ok(rows.into_iter().map(convert_row).collect())
    }
}

/// Convert one driver row into a domain row
///
/// Column names are upper-cased to match the source schema convention.
fn convert_row(row: mysql_async::Row) -> SourceRow {
    let columns = row.columns();
    let values = row.unwrap();

    columns
        .iter()
        .zip(values)
        .map(|(col, value)| (col.name_str().to_uppercase(), convert_value(value)))
        .collect()
}

/// Convert one driver value into a domain value
///
/// Unsupported temporal types (TIME durations) and invalid calendar dates
/// normalize to NULL rather than erroring, matching the tolerant row
/// contract.
fn convert_value(value: mysql_async::Value) -> SourceValue {
    use mysql_async::Value;

    match value {
        Value::NULL => SourceValue::Null,
        Value::Bytes(bytes) => SourceValue::Text(String::from_utf8_lossy(&bytes).into_owned()),
        Value::Int(i) => SourceValue::Int(i),
        Value::UInt(u) => SourceValue::Int(u as i64),
        Value::Float(f) => SourceValue::Float(f64::from(f)),
        Value::Double(d) => SourceValue::Float(d),
        Value::Date(year, month, day, hour, minute, second, micros) => {
            NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
                .and_then(|date| {
                    date.and_hms_micro_opt(
                        u32::from(hour),
                        u32::from(minute),
                        u32::from(second),
                        micros,
                    )
                })
                .map(|naive| SourceValue::DateTime(Utc.from_utc_datetime(&naive)))
                .unwrap_or(SourceValue::Null)
        }
        Value::Time(..) => SourceValue::Null,
    }
}
