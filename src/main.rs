//! sql-runner - execute a SQL file against a Supabase Postgres database.

use supabase_sql_runner::cli::Cli;
use supabase_sql_runner::config::{self, Settings};
use supabase_sql_runner::db::{self, Capabilities};
use supabase_sql_runner::error::Result;
use supabase_sql_runner::logging;
use supabase_sql_runner::report::Reporter;
use supabase_sql_runner::runner::{Outcome, Runner};
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut reporter = Reporter::stdout();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            reporter.error(e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    logging::init_stderr_logging(cli.verbose);

    match run(&cli, &mut reporter).await {
        Ok(outcome) => debug!(?outcome, "Finished"),
        Err(e) => {
            error!("{}: {}", e.category(), e);
            reporter.error(e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: &Cli, reporter: &mut Reporter<std::io::Stdout>) -> Result<Outcome> {
    // Settings come first: nothing else is checked or touched without them.
    config::load_env_file(&cli.env_file)?;
    let settings = Settings::from_env(&cli.env_file)?;

    let capabilities = Capabilities::detect(cli.no_connect);
    debug!(?capabilities, "Detected capabilities");
    let connector = db::connector(capabilities);

    Runner::new(&settings, connector.as_deref())
        .run(cli.sql_files(), reporter)
        .await
}
