//! Storage layer for repkit.
//!
//! This module provides SQLite-based persistence for:
//! - Workout history (the append-only training log)
//! - Habits and their per-day completion log
//! - The daily hydration counter

mod database;
mod migrations;

pub use database::Database;
