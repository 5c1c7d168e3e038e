//! Seam: typed query fragments between your code and your database driver.
//!
//! Filters compose into WHERE and JOIN clauses, scalar values travel with
//! explicit or inferred wire types, and labeled row cursors materialize
//! into lists, maps, records or single values.

pub use seam_core::*;
