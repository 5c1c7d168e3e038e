use crate::{AsValue, Result, Value};
use std::sync::Arc;

/// Column labels of a result set, shared across its rows.
pub type RowNames = Arc<[String]>;

/// The values of a single row.
pub type Row = Box<[Value]>;

/// A row of values along with the labels of its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabeled {
    pub labels: RowNames,
    pub values: Row,
}

impl RowLabeled {
    pub fn new(labels: RowNames, values: Row) -> Self {
        Self { labels, values }
    }

    pub fn names(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn column_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// The value under a column label, `None` when no column carries it.
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|label| label == name)
            .and_then(|i| self.values.get(i))
    }

    /// Decode a column into a host type, substituting `default` when the
    /// column is absent or NULL.
    pub fn get_or<T: AsValue>(&self, name: &str, default: T) -> Result<T> {
        match self.get_column(name) {
            Some(value) if !value.is_null() => T::try_from_value(value.clone()),
            _ => Ok(default),
        }
    }
}
