use crate::{Error, Filter, Result, RowLabeled, Selector, compose, reader};
use std::collections::HashMap;
use std::hash::Hash;

/// Fetch the first row matched by a mandatory identifying filter.
///
/// `None` is a caller mistake, reported as
/// [`Error::MissingRequiredFilter`] without touching the driver.
pub async fn get<S, T>(
    handle: S,
    filter: Option<Filter>,
    read: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<T>
where
    S: Selector,
{
    let Some(filter) = filter else {
        return Err(Error::MissingRequiredFilter(
            "an identifying filter must be supplied",
        ));
    };
    let cursor = compose::apply(handle, [filter]).execute().await?;
    reader::first(cursor, read).await
}

/// Fetch every row matched by a filter sequence. An empty sequence selects
/// everything.
pub async fn get_list<S, T>(
    handle: S,
    filters: impl IntoIterator<Item = Filter>,
    read: impl FnMut(&RowLabeled) -> Result<T>,
) -> Result<Vec<T>>
where
    S: Selector,
{
    let cursor = compose::apply(handle, filters).execute().await?;
    reader::to_list(cursor, read).await
}

/// Fetch rows matched by a filter sequence, grouped under a key selector.
pub async fn get_dictionary<S, K, V>(
    handle: S,
    filters: impl IntoIterator<Item = Filter>,
    key: impl FnMut(&RowLabeled) -> Result<K>,
    value: impl FnMut(&RowLabeled) -> Result<V>,
) -> Result<HashMap<K, Vec<V>>>
where
    S: Selector,
    K: Eq + Hash,
{
    let cursor = compose::apply(handle, filters).execute().await?;
    reader::to_grouped_map(cursor, key, value).await
}
