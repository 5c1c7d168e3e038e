use crate::{AsValue, Cursor, Error, FromRow, Result, RowLabeled, from_row};
use anyhow::anyhow;
use std::collections::HashMap;
use std::hash::Hash;

fn current<C: Cursor>(cursor: &C) -> Result<&RowLabeled> {
    cursor
        .row()
        .ok_or_else(|| anyhow!("cursor advanced but exposes no row").into())
}

/// Collect every remaining row through the selector, in cursor order.
pub async fn to_list<C, T>(
    mut cursor: C,
    mut selector: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<Vec<T>>
where
    C: Cursor,
{
    let mut out = Vec::new();
    while cursor.advance().await? {
        out.push(selector(current(&cursor)?)?);
    }
    Ok(out)
}

/// Group every remaining row by a key selector, values in cursor order
/// within each group.
pub async fn to_grouped_map<C, K, V>(
    mut cursor: C,
    mut key: impl FnMut(&RowLabeled) -> Result<K>,
    mut value: impl FnMut(&RowLabeled) -> Result<V>,
) -> Result<HashMap<K, Vec<V>>>
where
    C: Cursor,
    K: Eq + Hash,
{
    let mut out: HashMap<K, Vec<V>> = HashMap::new();
    while cursor.advance().await? {
        let row = current(&cursor)?;
        let (k, v) = (key(row)?, value(row)?);
        out.entry(k).or_default().push(v);
    }
    Ok(out)
}

/// The first row, leaving the cursor wherever it stands afterwards.
/// [`Error::EmptySequence`] when there is none.
pub async fn first<C, T>(
    mut cursor: C,
    mut selector: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<T>
where
    C: Cursor,
{
    if !cursor.advance().await? {
        return Err(Error::EmptySequence);
    }
    selector(current(&cursor)?)
}

/// The first row, or `None` when the result set is empty.
pub async fn first_or_default<C, T>(
    mut cursor: C,
    mut selector: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<Option<T>>
where
    C: Cursor,
{
    if !cursor.advance().await? {
        return Ok(None);
    }
    selector(current(&cursor)?).map(Some)
}

/// Advance, read, then advance again to prove the row was the only one.
async fn single_row<C, T>(
    cursor: &mut C,
    selector: &mut impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<Option<T>>
where
    C: Cursor,
{
    if !cursor.advance().await? {
        return Ok(None);
    }
    let value = selector(current(cursor)?)?;
    if cursor.advance().await? {
        return Err(Error::NotSingle);
    }
    Ok(Some(value))
}

/// Exactly one row. [`Error::EmptySequence`] on none,
/// [`Error::NotSingle`] on more than one.
pub async fn single<C, T>(
    mut cursor: C,
    mut selector: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<T>
where
    C: Cursor,
{
    single_row(&mut cursor, &mut selector)
        .await?
        .ok_or(Error::EmptySequence)
}

/// `None` instead of failing when the result set holds zero rows or more
/// than one.
pub async fn single_or_default<C, T>(
    mut cursor: C,
    mut selector: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<Option<T>>
where
    C: Cursor,
{
    match single_row(&mut cursor, &mut selector).await {
        Err(Error::NotSingle) => Ok(None),
        other => other,
    }
}

/// Selector for the first column of each row, substituting `fallback` when
/// it is NULL.
pub fn scalar<T: AsValue + Clone>(fallback: T) -> impl FnMut(&RowLabeled) -> Result<T> {
    move |row| match row.column_at(0) {
        Some(value) if !value.is_null() => T::try_from_value(value.clone()),
        _ => Ok(fallback.clone()),
    }
}

/// Selector decoding each row into a record through its field table.
pub fn record<T: FromRow + 'static>() -> impl FnMut(&RowLabeled) -> Result<T> {
    |row| Ok(from_row(row, None))
}

/// Like [`record`], substituting `fallback` for rows that populate no field.
pub fn record_or<T: FromRow + 'static>(fallback: impl Fn() -> T) -> impl FnMut(&RowLabeled) -> Result<T> {
    move |row| Ok(from_row(row, Some(&fallback)))
}
