//! Tests for the `sql-runner` binary's validation order and manual fallback.

use super::common::run_sql_runner;
use std::path::Path;
use tempfile::TempDir;

const URL: &str = "https://abcdefghijkl.supabase.co";
const KEY: &str = "service-role-secret-value";

fn credentials() -> Vec<(&'static str, &'static str)> {
    vec![
        ("NEXT_PUBLIC_SUPABASE_URL", URL),
        ("SUPABASE_SERVICE_ROLE_KEY", KEY),
    ]
}

fn workspace_with_sql(sql: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("seed.sql"), sql).unwrap();
    dir
}

#[test]
fn test_missing_credentials_is_checked_first() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &[], &[]);

    assert_eq!(out.code, 1);
    assert!(
        out.stdout.contains("Missing Supabase credentials in .env.local"),
        "stdout: {}",
        out.stdout
    );
    assert!(!out.stdout.contains("Usage"));
}

#[test]
fn test_missing_credentials_before_file_check() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &[("SUPABASE_SERVICE_ROLE_KEY", KEY)], &["nope.sql"]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("Missing Supabase credentials"));
    assert!(!out.stdout.contains("File not found"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &credentials(), &[]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("Missing SQL file argument"));
    assert!(out.stdout.contains("Usage: sql-runner [OPTIONS] <SQL_FILE>"));
}

#[test]
fn test_nonexistent_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &credentials(), &["missing/migration.sql"]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("File not found"));
    assert!(out.stdout.contains("missing/migration.sql"));
    assert!(!out.stdout.contains("Connecting"));
}

#[test]
fn test_no_connect_prints_manual_instructions() {
    let dir = workspace_with_sql("SELECT 1;");

    let out = run_sql_runner(dir.path(), &credentials(), &["--no-connect", "seed.sql"]);

    assert_eq!(out.code, 0, "stdout: {}\nstderr: {}", out.stdout, out.stderr);
    assert!(out.stdout.contains("SQL File: seed.sql"));
    assert!(out.stdout.contains("Direct database connection not available"));
    assert!(out.stdout.contains("3. Paste the SQL from:"));
    assert!(out.stdout.contains("seed.sql"));
    assert!(!out.stdout.contains(KEY));
}

#[test]
fn test_credentials_from_env_file() {
    let dir = workspace_with_sql("SELECT 1;");
    std::fs::write(
        dir.path().join(".env.local"),
        format!("NEXT_PUBLIC_SUPABASE_URL={URL}\nSUPABASE_SERVICE_ROLE_KEY={KEY}\n"),
    )
    .unwrap();

    let out = run_sql_runner(dir.path(), &[], &["--no-connect", "seed.sql"]);

    assert_eq!(out.code, 0, "stdout: {}", out.stdout);
    assert!(out.stdout.contains(&format!("Supabase: {URL}")));
}

#[test]
fn test_custom_env_file_path() {
    let dir = workspace_with_sql("SELECT 1;");
    std::fs::create_dir(dir.path().join("config")).unwrap();
    std::fs::write(
        dir.path().join("config/supabase.env"),
        format!("NEXT_PUBLIC_SUPABASE_URL={URL}\nSUPABASE_SERVICE_ROLE_KEY={KEY}\n"),
    )
    .unwrap();

    let out = run_sql_runner(
        dir.path(),
        &[],
        &["--env-file", "config/supabase.env", "--no-connect", "seed.sql"],
    );

    assert_eq!(out.code, 0, "stdout: {}", out.stdout);
}

#[test]
fn test_process_environment_wins_over_env_file() {
    let dir = workspace_with_sql("SELECT 1;");
    std::fs::write(
        dir.path().join(".env.local"),
        format!("NEXT_PUBLIC_SUPABASE_URL=https://fromfile.supabase.co\nSUPABASE_SERVICE_ROLE_KEY={KEY}\n"),
    )
    .unwrap();

    let out = run_sql_runner(
        dir.path(),
        &[("NEXT_PUBLIC_SUPABASE_URL", URL)],
        &["--no-connect", "seed.sql"],
    );

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains(URL));
    assert!(!out.stdout.contains("fromfile"));
}

#[test]
fn test_malformed_endpoint_fails_predictably() {
    let dir = workspace_with_sql("SELECT 1;");

    let out = run_sql_runner(
        dir.path(),
        &[
            ("NEXT_PUBLIC_SUPABASE_URL", "http://localhost:54321"),
            ("SUPABASE_SERVICE_ROLE_KEY", KEY),
            ("SUPABASE_DB_PASSWORD", "pw"),
        ],
        &["seed.sql"],
    );

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("Cannot derive database host"));
    assert!(out.stdout.contains("http://localhost:54321"));
    assert!(!out.stdout.contains("Connecting"));
}

#[test]
fn test_extra_arguments_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &credentials(), &["a.sql", "b.sql"]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("Expected exactly one SQL file, got 2"));
    assert!(!out.stdout.contains("File not found"));
}

#[test]
fn test_missing_credentials_before_argument_count() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &[], &["a.sql", "b.sql"]);

    assert_eq!(out.code, 1);
    assert!(
        out.stdout.contains("Missing Supabase credentials"),
        "stdout: {}",
        out.stdout
    );
    assert!(!out.stdout.contains("Usage"));
}

#[test]
fn test_unknown_flag_reports_one_usage_line() {
    let dir = tempfile::tempdir().unwrap();

    let out = run_sql_runner(dir.path(), &credentials(), &["--bogus", "a.sql"]);

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("unexpected argument '--bogus' found"));
    assert_eq!(out.stdout.matches("Usage:").count(), 1, "stdout: {}", out.stdout);
    assert!(!out.stdout.contains("error:"));
}

#[test]
fn test_help_exits_zero() {
    let out = run_sql_runner(Path::new("."), &[], &["--help"]);

    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("SQL_FILE"));
}
