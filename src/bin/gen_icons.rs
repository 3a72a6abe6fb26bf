//! gen-icons - resize one source image into the Android and PWA icon sets.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use supabase_sql_runner::icons::{self, CommandResizer};
use supabase_sql_runner::logging;
use supabase_sql_runner::report::Reporter;

/// Generate Android launcher and PWA icons from one source image.
#[derive(Parser, Debug)]
#[command(name = "gen-icons")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image, ideally square and at least 512x512
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Project root the icon directories are created under
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Resize executable, called as `<tool> -z <size> <size> <source> --out <file>`
    #[arg(long, value_name = "PROGRAM", default_value = "sips")]
    tool: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_stderr_logging(args.verbose);

    let mut reporter = Reporter::stdout();
    match run(&args, &mut reporter) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            reporter.error(format!("{e:#}"));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, reporter: &mut Reporter<std::io::Stdout>) -> Result<bool> {
    let resizer = CommandResizer::new(&args.tool);
    let summary = icons::generate(&args.source, &args.root, &resizer, reporter)?;

    if !summary.is_success() {
        reporter.error(format!(
            "{} of {} icons failed",
            summary.failed.len(),
            summary.failed.len() + summary.written.len()
        ));
        return Ok(false);
    }

    reporter.success(format!("All {} icons generated successfully!", summary.written.len()));
    reporter.plain("\nNext: npx cap sync android");
    Ok(true)
}
