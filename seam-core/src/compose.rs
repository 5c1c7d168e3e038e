use crate::{Filter, JoinFilter, Selector, WhereFilter};
use std::collections::HashSet;

/// Drop joins whose kind and table repeat an earlier one, keeping the first
/// occurrence. The ON condition plays no part in the identity, so a repeat
/// with a different condition is still dropped.
pub fn dedup_joins(joins: Vec<JoinFilter>) -> Vec<JoinFilter> {
    let mut seen = HashSet::new();
    joins
        .into_iter()
        .filter(|join| {
            let (kind, table) = join.key();
            let fresh = seen.insert((kind, table.to_string()));
            if !fresh {
                log::debug!("Dropping repeated {kind:?} join against {table}");
            }
            fresh
        })
        .collect()
}

/// Left associative conjunction of WHERE fragments, parameters concatenated
/// in order. `None` on an empty sequence.
pub fn fold_wheres(wheres: impl IntoIterator<Item = WhereFilter>) -> Option<WhereFilter> {
    wheres.into_iter().reduce(WhereFilter::and)
}

/// Thread a heterogeneous filter sequence onto a statement handle: joins
/// first, deduplicated in encounter order, then at most one WHERE clause
/// holding the conjunction of every WHERE fragment. Empty filters and an
/// all-empty sequence leave the handle untouched.
pub fn apply<S: Selector>(handle: S, filters: impl IntoIterator<Item = Filter>) -> S {
    let mut joins = Vec::new();
    let mut wheres = Vec::new();
    for filter in filters {
        match filter {
            Filter::Join(join) => joins.push(join),
            Filter::Where(clause) => wheres.push(clause),
            Filter::Empty => {}
        }
    }
    let mut handle = dedup_joins(joins)
        .into_iter()
        .fold(handle, |handle, join| {
            handle.join(join.kind, &join.table, join.on)
        });
    if let Some(clause) = fold_wheres(wheres) {
        handle = handle.where_clause(clause.predicate, clause.params);
    }
    handle
}
