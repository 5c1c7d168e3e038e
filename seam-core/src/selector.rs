use crate::{Cursor, Expr, JoinType, Parameter, Result};
use std::future::Future;

/// A driver-side statement handle that filters compose onto.
///
/// `join` and `where_clause` accumulate fragments by value and return the
/// handle, so composition reads as a fold. `execute` consumes the handle
/// and yields the cursor over its result set.
pub trait Selector: Send + Sized {
    type Cursor: Cursor;

    fn join(self, kind: JoinType, table: &str, on: Expr) -> Self;

    fn where_clause(self, predicate: Expr, params: Vec<Parameter>) -> Self;

    fn execute(self) -> impl Future<Output = Result<Self::Cursor>> + Send;
}
