use crate::{Result, Row, RowLabeled, RowNames};
use futures::{Stream, StreamExt};
use std::future::Future;

/// Forward-only traversal over a result set.
///
/// A cursor starts positioned before the first row. `advance` moves to the
/// next row and reports whether one exists; `row` exposes the current row
/// and is `None` before the first `advance` and after exhaustion.
pub trait Cursor: Send {
    fn advance(&mut self) -> impl Future<Output = Result<bool>> + Send;

    fn row(&self) -> Option<&RowLabeled>;
}

/// A cursor over rows already materialized in memory. The backbone of the
/// test suites and of drivers that buffer whole result sets.
pub struct VecCursor {
    labels: RowNames,
    rows: std::vec::IntoIter<Row>,
    current: Option<RowLabeled>,
}

impl VecCursor {
    pub fn new(labels: RowNames, rows: Vec<Row>) -> Self {
        Self {
            labels,
            rows: rows.into_iter(),
            current: None,
        }
    }
}

impl Cursor for VecCursor {
    fn advance(&mut self) -> impl Future<Output = Result<bool>> + Send {
        self.current = self
            .rows
            .next()
            .map(|values| RowLabeled::new(self.labels.clone(), values));
        std::future::ready(Ok(self.current.is_some()))
    }

    fn row(&self) -> Option<&RowLabeled> {
        self.current.as_ref()
    }
}

/// Adapts a fallible row stream, as produced by async drivers, into a
/// [`Cursor`].
pub struct StreamCursor<S> {
    stream: S,
    current: Option<RowLabeled>,
}

impl<S> StreamCursor<S>
where
    S: Stream<Item = Result<RowLabeled>> + Send + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            current: None,
        }
    }
}

impl<S> Cursor for StreamCursor<S>
where
    S: Stream<Item = Result<RowLabeled>> + Send + Unpin,
{
    fn advance(&mut self) -> impl Future<Output = Result<bool>> + Send {
        async move {
            self.current = self.stream.next().await.transpose()?;
            Ok(self.current.is_some())
        }
    }

    fn row(&self) -> Option<&RowLabeled> {
        self.current.as_ref()
    }
}
