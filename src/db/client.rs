// ABOUTME: Db - handle to the fixed remote MySQL database.
// ABOUTME: Opens one connection per call, closes it before returning. No pool.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::debug;

use super::schema::validate_identifier;
use crate::config::DbConfig;
use crate::error::DbError;

/// One row of the notice table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub posted_at: NaiveDate,
}

/// Handle to the remote analysis database.
///
/// Holds settings only; a connection exists solely between a successful
/// connect and the end of the call that opened it.
#[derive(Clone)]
pub struct Db {
    config: DbConfig,
}

impl Db {
    /// Create a handle from connection settings.
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    fn options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
    }

    async fn connect(&self) -> Result<MySqlConnection, DbError> {
        debug!(host = %self.config.host, database = %self.config.database, "opening connection");
        let options = self.options();
        Ok(options.connect().await?)
    }

    /// Require `table`.`column` to exist in the configured database. The live
    /// catalog is the allow-list; no identifier reaches SQL text before
    /// passing it. Values are bound, never spliced.
    async fn ensure_column(
        &self,
        conn: &mut MySqlConnection,
        table: &str,
        column: &str,
    ) -> Result<(), DbError> {
        let known: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.columns \
             WHERE table_schema = ? AND table_name = ? AND column_name = ?",
        )
        .bind(&self.config.database)
        .bind(table)
        .bind(column)
        .fetch_one(&mut *conn)
        .await?;

        if known == 0 {
            return Err(DbError::UnknownColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
        Ok(())
    }

    /// Fetch every value of one column as f64, dropping NULLs.
    pub async fn column_values(&self, table: &str, column: &str) -> Result<Vec<f64>, DbError> {
        let table = validate_identifier(table)?;
        let column = validate_identifier(column)?;

        let mut conn = self.connect().await?;
        self.ensure_column(&mut conn, table, column).await?;

        let sql = format!("SELECT CAST(`{column}` AS DOUBLE) FROM `{table}`");
        let rows: Vec<Option<f64>> = sqlx::query_scalar(&sql).fetch_all(&mut conn).await?;
        conn.close().await?;

        Ok(rows.into_iter().flatten().collect())
    }

    /// Fetch every notice whose title contains `keyword` as a substring.
    /// Zero matches is an empty vector, not an error.
    pub async fn notices_by_keyword(&self, keyword: &str) -> Result<Vec<Notice>, DbError> {
        let table = validate_identifier(&self.config.notice_table)?;

        let mut conn = self.connect().await?;
        self.ensure_column(&mut conn, table, "title").await?;

        let sql =
            format!("SELECT id, title, url, posted_at FROM `{table}` WHERE title LIKE ? ORDER BY id");
        let pattern = format!("%{keyword}%");
        let notices = sqlx::query_as::<_, Notice>(&sql)
            .bind(&pattern)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(matches = notices.len(), "keyword search finished");
        Ok(notices)
    }
}
