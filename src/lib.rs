//! Supabase SQL runner - execute a SQL file against a hosted Postgres database.
//!
//! This library exposes the core modules for the binaries and integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod icons;
pub mod logging;
pub mod report;
pub mod runner;
