//! Format implementations
//!
//! This module contains all format implementations that convert between
//! text representations and the parsed [`Document`](crate::parts::Document).

pub mod json;
pub mod latex;
pub mod markdown;

pub use json::JsonFormat;
pub use latex::{DocumentOptions, LatexFormat, RenderContext};
pub use markdown::MarkdownFormat;
