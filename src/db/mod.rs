//! Database module for SQLite operations.
//!
//! This module provides:
//! - Pool setup and SQLite pragma configuration
//! - Idempotent schema creation
//! - Repository layer for log entries and the daily target

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
