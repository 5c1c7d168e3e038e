use crate::{Expr, Parameter, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// A WHERE fragment: a predicate plus the bind parameters it references.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereFilter {
    pub predicate: Expr,
    pub params: Vec<Parameter>,
}

impl WhereFilter {
    pub fn new(predicate: Expr) -> Self {
        Self {
            predicate,
            params: Vec::new(),
        }
    }

    pub fn with_params(predicate: Expr, params: Vec<Parameter>) -> Self {
        Self { predicate, params }
    }

    /// Conjoin another fragment, concatenating its parameters after this
    /// fragment's. Both inputs are consumed; neither is mutated in place.
    pub fn and(mut self, other: WhereFilter) -> Self {
        self.predicate = self.predicate.and(other.predicate);
        self.params.extend(other.params);
        self
    }
}

/// A JOIN fragment against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinFilter {
    pub kind: JoinType,
    pub table: String,
    pub on: Expr,
}

impl JoinFilter {
    pub fn new(kind: JoinType, table: impl Into<String>, on: Expr) -> Self {
        Self {
            kind,
            table: table.into(),
            on,
        }
    }

    pub fn on_columns(
        kind: JoinType,
        table: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::new(kind, table, Expr::columns_equal(left, right))
    }

    /// Deduplication identity. The ON condition is deliberately excluded:
    /// two joins of the same kind against the same table collide and the
    /// first one wins.
    pub fn key(&self) -> (JoinType, &str) {
        (self.kind, &self.table)
    }
}

/// One composable query fragment.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Filter {
    #[default]
    Empty,
    Where(WhereFilter),
    Join(JoinFilter),
}

impl Filter {
    pub fn where_clause(predicate: Expr) -> Self {
        Self::Where(WhereFilter::new(predicate))
    }

    pub fn where_with_params(predicate: Expr, params: Vec<Parameter>) -> Self {
        Self::Where(WhereFilter::with_params(predicate, params))
    }

    pub fn join(kind: JoinType, table: impl Into<String>, on: Expr) -> Self {
        Self::Join(JoinFilter::new(kind, table, on))
    }

    pub fn join_on_columns(
        kind: JoinType,
        table: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self::Join(JoinFilter::on_columns(kind, table, left, right))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A lookup key that is either an exact value or a LIKE pattern, whichever
/// is present and non empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMatch {
    pub value: Option<String>,
    pub pattern: Option<String>,
}

impl NameMatch {
    pub fn exact(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            pattern: None,
        }
    }

    pub fn like(pattern: impl Into<String>) -> Self {
        Self {
            value: None,
            pattern: Some(pattern.into()),
        }
    }
}

/// Membership filter over a set of integer keys. A present but empty id
/// sequence still yields an IN filter, which matches no row; only an absent
/// sequence yields nothing.
pub fn by_ids(
    column: impl Into<String>,
    ids: Option<impl IntoIterator<Item = i32>>,
) -> impl Iterator<Item = Filter> {
    let column = column.into();
    ids.into_iter()
        .map(move |ids| Filter::where_clause(Expr::in_list(column.clone(), ids)))
}

/// Equality or LIKE filter from a [`NameMatch`], exact value taking
/// precedence. Empty strings count as absent.
pub fn by_name<C: Into<String>>(
    column: C,
    name: Option<&NameMatch>,
) -> impl Iterator<Item = Filter> + use<C> {
    let column = column.into();
    name.and_then(|name| {
        if let Some(value) = name.value.as_deref().filter(|v| !v.is_empty()) {
            Some(Filter::where_clause(Expr::eq(
                column.clone(),
                Value::from(value),
            )))
        } else {
            name.pattern
                .as_deref()
                .filter(|p| !p.is_empty())
                .map(|pattern| Filter::where_clause(Expr::like(column.clone(), pattern)))
        }
    })
    .into_iter()
}

/// Concatenate filter groups, dropping empties.
pub fn concat(
    groups: impl IntoIterator<Item = impl IntoIterator<Item = Filter>>,
) -> impl Iterator<Item = Filter> {
    groups
        .into_iter()
        .flatten()
        .filter(|filter| !filter.is_empty())
}
