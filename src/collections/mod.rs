//! Purpose-built collections backing the secondary indexes.

pub mod linked_set;

pub use linked_set::{LinkedSet, SetError};
