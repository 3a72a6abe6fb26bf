//! Mock connector for testing.
//!
//! Records every connect, batch and close so tests can assert what the runner
//! did without a live database.

use super::{Connector, Session};
use crate::config::ConnectionTarget;
use crate::error::{RunnerError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

/// Something the mock observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    /// A connection was opened to this host.
    Connect(String),
    /// A batch was executed.
    Execute(String),
    /// The connection was released.
    Close,
}

/// A connector that succeeds by default and records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    events: Arc<Mutex<Vec<MockEvent>>>,
    connect_error: Option<String>,
    execute_error: Option<String>,
}

impl MockConnector {
    /// Creates a connector whose connects and batches all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every connect attempt fail with `message`.
    pub fn failing_connect(message: impl Into<String>) -> Self {
        Self {
            connect_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Makes every batch fail with `message`, as a database error would.
    pub fn failing_execute(message: impl Into<String>) -> Self {
        Self {
            execute_error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Everything observed so far.
    pub fn events(&self) -> Vec<MockEvent> {
        lock(&self.events).clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self, target: &ConnectionTarget) -> Result<Box<dyn Session>> {
        lock(&self.events).push(MockEvent::Connect(target.host.clone()));

        if let Some(message) = &self.connect_error {
            return Err(RunnerError::database(message.clone()));
        }

        Ok(Box::new(MockSession {
            events: Arc::clone(&self.events),
            execute_error: self.execute_error.clone(),
        }))
    }
}

struct MockSession {
    events: Arc<Mutex<Vec<MockEvent>>>,
    execute_error: Option<String>,
}

#[async_trait]
impl Session for MockSession {
    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        lock(&self.events).push(MockEvent::Execute(sql.to_string()));

        match &self.execute_error {
            Some(message) => Err(RunnerError::database(message.clone())),
            None => Ok(()),
        }
    }

    async fn close(self: Box<Self>) -> Result<()> {
        lock(&self.events).push(MockEvent::Close);
        Ok(())
    }
}

fn lock(events: &Mutex<Vec<MockEvent>>) -> MutexGuard<'_, Vec<MockEvent>> {
    events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
