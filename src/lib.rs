//! `ereflow` - reflow plain-text books for small e-reader displays.
//!
//! Text is greedily wrapped into short fixed-width lines, with optional
//! removal of Project Gutenberg boilerplate and title-based output names.


// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod gutenberg;
pub mod report;
pub mod services;
pub mod wrap;

pub use config::FormatConfig;
pub use error::{Error, Result};
pub use wrap::{wrap, LineWrapper, Measure};
