//! Database connectivity for the runner.
//!
//! Direct connectivity is an optional capability: the Postgres driver is only
//! compiled in with the `postgres` cargo feature, and the operator can switch
//! it off at runtime. [`Capabilities::detect`] produces the flag and
//! [`connector`] turns it into a concrete [`Connector`], or `None` when the
//! runner has to fall back to manual instructions.

mod mock;
#[cfg(feature = "postgres")]
mod postgres;

pub use mock::{MockConnector, MockEvent};
#[cfg(feature = "postgres")]
pub use postgres::PostgresConnector;

use crate::config::ConnectionTarget;
use crate::error::Result;
use async_trait::async_trait;

/// Optional capabilities available to this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// A database driver is compiled in and enabled.
    pub database: bool,
}

impl Capabilities {
    /// Probes what this build supports. `disable_database` comes from `--no-connect`.
    pub fn detect(disable_database: bool) -> Self {
        Self {
            database: cfg!(feature = "postgres") && !disable_database,
        }
    }
}

/// Returns the connector for the detected capabilities, if any.
pub fn connector(capabilities: Capabilities) -> Option<Box<dyn Connector>> {
    if !capabilities.database {
        return None;
    }

    #[cfg(feature = "postgres")]
    {
        Some(Box::new(PostgresConnector))
    }

    #[cfg(not(feature = "postgres"))]
    {
        None
    }
}

/// Opens sessions against a connection target.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Opens one connection to `target`.
    async fn connect(&self, target: &ConnectionTarget) -> Result<Box<dyn Session>>;
}

/// A single open connection.
///
/// Callers must finish with [`Session::close`] on every path.
#[async_trait]
pub trait Session: Send {
    /// Executes `sql` as one batch and commits it.
    async fn execute_batch(&mut self, sql: &str) -> Result<()>;

    /// Releases the connection.
    async fn close(self: Box<Self>) -> Result<()>;
}
