//! Markdown import tests
//!
//! Tests for Markdown → parts.

mod import;
mod table;
