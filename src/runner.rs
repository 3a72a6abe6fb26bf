//! The SQL runner.
//!
//! A strictly linear sequence: check the file argument, read the file, derive
//! the connection target, then either execute the whole file as one batch or,
//! without a database connector, tell the operator how to run it by hand.
//! Settings are validated by the caller before the runner exists.

use crate::config::{resolve_path, ConnectionTarget, Settings};
use crate::db::Connector;
use crate::error::{RunnerError, Result};
use crate::report::Reporter;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const DASHBOARD_URL: &str = "https://supabase.com/dashboard";

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The batch was executed and committed.
    Executed,
    /// No database connector; manual instructions were printed.
    ManualFallback,
}

/// Runs one SQL file against the configured database.
pub struct Runner<'a> {
    settings: &'a Settings,
    connector: Option<&'a dyn Connector>,
}

impl<'a> Runner<'a> {
    /// `connector` is `None` when the database capability is unavailable.
    pub fn new(settings: &'a Settings, connector: Option<&'a dyn Connector>) -> Self {
        Self {
            settings,
            connector,
        }
    }

    /// Executes the single file in `sql_files`, reporting progress through `reporter`.
    pub async fn run<W: Write>(
        &self,
        sql_files: &[PathBuf],
        reporter: &mut Reporter<W>,
    ) -> Result<Outcome> {
        let sql_file = match sql_files {
            [file] => file,
            [] => return Err(RunnerError::usage("Missing SQL file argument")),
            files => {
                return Err(RunnerError::usage(format!(
                    "Expected exactly one SQL file, got {}",
                    files.len()
                )))
            }
        };

        let path = resolve_path(sql_file);
        if !path.exists() {
            return Err(RunnerError::FileNotFound(path));
        }

        let sql = std::fs::read_to_string(&path)
            .map_err(|e| RunnerError::io(format!("Failed to read {}: {e}", path.display())))?;
        debug!("Read {} bytes from {}", sql.len(), path.display());

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        reporter.info(format!("SQL File: {file_name}"));
        reporter.info(format!("Supabase: {}", self.settings.supabase_url));
        reporter.separator();

        let target = ConnectionTarget::derive(self.settings)?;
        debug!("Connection target: {target:?}");

        let Some(connector) = self.connector else {
            print_manual_instructions(reporter, &target, &path);
            return Ok(Outcome::ManualFallback);
        };

        reporter.info("Connecting to database...");
        let mut session = connector.connect(&target).await?;
        reporter.success("Connected!");

        reporter.info("Executing SQL...");
        let executed = session.execute_batch(&sql).await;

        if let Err(e) = session.close().await {
            warn!("Failed to release connection: {e}");
        }
        executed?;

        info!("Executed {} against {}", file_name, target.display_string());
        reporter.success("SQL executed successfully!");
        Ok(Outcome::Executed)
    }
}

fn print_manual_instructions<W: Write>(
    reporter: &mut Reporter<W>,
    target: &ConnectionTarget,
    path: &Path,
) {
    let editor_url = match &target.project_ref {
        Some(project_ref) => format!("{DASHBOARD_URL}/project/{project_ref}/sql"),
        None => DASHBOARD_URL.to_string(),
    };

    reporter.warning("Direct database connection not available");
    reporter.plain("\nPlease use the Supabase Dashboard or Supabase CLI:");
    reporter.plain(format!("1. Go to: {editor_url}"));
    reporter.plain("2. Open SQL Editor");
    reporter.plain(format!("3. Paste the SQL from: {}", path.display()));
    reporter.plain("4. Click 'Run'");
    reporter.plain(format!(
        "\nOr with the Supabase CLI: supabase db execute --file {}",
        path.display()
    ));
}
