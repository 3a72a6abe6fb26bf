//! PostgreSQL connector implementation.
//!
//! Opens a single `PgConnection` per run and executes the SQL file through the
//! simple query protocol, so a file with several statements goes over as one
//! batch inside one transaction.

use crate::config::{ConnectionTarget, SslMode};
use crate::db::{Connector, Session};
use crate::error::{RunnerError, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgDatabaseError, PgSslMode};
use sqlx::{Connection, Executor};
use tracing::{debug, warn};

/// Connects with sqlx using the driver's default timeouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresConnector;

#[async_trait]
impl Connector for PostgresConnector {
    async fn connect(&self, target: &ConnectionTarget) -> Result<Box<dyn Session>> {
        let options = connect_options(target)?;

        debug!("Connecting to {}", target.display_string());
        let conn = PgConnection::connect_with(&options)
            .await
            .map_err(|e| map_connection_error(e, target))?;
        debug!("Successfully connected to database");

        Ok(Box::new(PostgresSession { conn }))
    }
}

/// Builds sqlx options from a target. Requires a password.
fn connect_options(target: &ConnectionTarget) -> Result<PgConnectOptions> {
    let password = target.require_password()?;

    let ssl_mode = match target.ssl_mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    };

    Ok(PgConnectOptions::new()
        .host(&target.host)
        .port(target.port)
        .username(&target.user)
        .password(password)
        .database(&target.database)
        .ssl_mode(ssl_mode)
        .application_name("sql-runner"))
}

struct PostgresSession {
    conn: PgConnection,
}

#[async_trait]
impl Session for PostgresSession {
    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        let mut tx = self
            .conn
            .begin()
            .await
            .map_err(|e| RunnerError::database(format_database_error(e)))?;

        // On error the transaction is rolled back when `tx` drops.
        let conn: &mut PgConnection = &mut tx;
        conn.execute(sqlx::raw_sql(sql))
            .await
            .map_err(|e| RunnerError::database(format_database_error(e)))?;

        tx.commit()
            .await
            .map_err(|e| RunnerError::database(format_database_error(e)))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn.close().await.map_err(|e| {
            warn!("Error while closing connection: {e}");
            RunnerError::database(e.to_string())
        })
    }
}

/// Prefixes a hint to the driver's message, which is always kept verbatim.
fn map_connection_error(error: sqlx::Error, target: &ConnectionTarget) -> RunnerError {
    let host = &target.host;
    let port = target.port;
    let error_str = error.to_string();
    let lower = error_str.to_lowercase();

    let hint = if lower.contains("connection refused") || lower.contains("could not connect") {
        format!("Cannot connect to {host}:{port}. Check that the server is running")
    } else if lower.contains("password authentication failed")
        || lower.contains("authentication failed")
    {
        format!(
            "Authentication failed for user '{}'. Check your credentials",
            target.user
        )
    } else if lower.contains("failed to lookup address") || lower.contains("name or service") {
        format!("Cannot resolve host {host}. Check the project ref in the Supabase URL")
    } else if lower.contains("timed out") || lower.contains("timeout") {
        format!("Connection to {host}:{port} timed out")
    } else {
        return RunnerError::database(format_database_error(error));
    };

    RunnerError::database(format!("{hint}: {error_str}"))
}

/// Formats a database error with the server's DETAIL and HINT lines, if any.
fn format_database_error(error: sqlx::Error) -> String {
    let Some(db_error) = error.as_database_error() else {
        return error.to_string();
    };

    let mut result = String::from("ERROR: ");
    result.push_str(db_error.message());

    if let Some(pg_error) = db_error.try_downcast_ref::<PgDatabaseError>() {
        if let Some(detail) = pg_error.detail() {
            result.push_str("\n  DETAIL: ");
            result.push_str(detail);
        }

        if let Some(hint) = pg_error.hint() {
            result.push_str("\n  HINT: ");
            result.push_str(hint);
        }

        if let Some(constraint) = pg_error.constraint() {
            result.push_str("\n  CONSTRAINT: ");
            result.push_str(constraint);
        }
    }

    result
}
