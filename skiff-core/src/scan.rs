use crate::{Entity, Error, Result, RowLabeled, stream::Stream};
use futures::StreamExt;
use std::pin::pin;

/// Scan the first row of the result into one entity.
///
/// Zero rows is the distinguished [`Error::NotFound`]; an error produced by
/// the cursor before any row is passed through unchanged. The stream is
/// dropped on every exit path, releasing the underlying cursor.
pub async fn scan_one<E, S>(rows: S) -> Result<E>
where
    E: Entity,
    S: Stream<Item = Result<RowLabeled>> + Send,
{
    let mut rows = pin!(rows);
    match rows.next().await {
        Some(row) => E::from_row(&row?),
        None => Err(Error::NotFound),
    }
}

/// Scan every row of the result into a sequence of entities, in result
/// order. Zero rows yields an empty sequence, not an error.
pub async fn scan_many<E, S>(rows: S) -> Result<Vec<E>>
where
    E: Entity,
    S: Stream<Item = Result<RowLabeled>> + Send,
{
    let mut rows = pin!(rows);
    let mut result = Vec::new();
    while let Some(row) = rows.next().await {
        result.push(E::from_row(&row?)?);
    }
    Ok(result)
}
