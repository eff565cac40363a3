//! Result export.
//!
//! Persists the collected `address#region` entries to a text file.

mod text;

pub use text::{save_results, write_results};
