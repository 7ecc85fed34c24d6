//! LaTeX export tests
//!
//! Tests for parts → LaTeX, including full-document snapshots.

mod export;
