//! Table I/O for the dashboard: reading the raw consumption table and keeping
//! it cached for the session.
//!
//! The pipelines in `edash-energy` take a `DataFrame` and do not care where
//! it came from; this crate is the collaborator that produces it.

pub mod cache;
pub mod table;

pub use cache::{SourceStamp, TableCache};
pub use table::{read_table, TableFormat};
