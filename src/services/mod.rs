//! Formatting services built on the text core.
//!
//! These modules handle files and directories; the wrapping and stripping
//! logic itself lives in [`crate::wrap`] and [`crate::gutenberg`].

pub mod batch;
pub mod naming;
pub mod pipeline;
