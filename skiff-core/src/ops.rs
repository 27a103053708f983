use crate::{
    Entity, Error, Executor, Query, QueryResult, Result, RowsAffected, UpdateOptions, Value,
    insert_statement, scan_many, scan_one, update_statement,
};
use futures::StreamExt;
use log::trace;
use std::pin::pin;

/// Insert the entity's current values.
///
/// When the entity has generated columns the statement asks the database
/// for the full row back and the entity is rehydrated in place, so server
/// produced values (identity keys, timestamps) become visible to the
/// caller. Otherwise this is a plain execute.
pub async fn insert<E, X>(executor: &mut X, entity: &mut E) -> Result<RowsAffected>
where
    E: Entity + Send,
    X: Executor,
{
    let statement = insert_statement(entity);
    trace!("{}", statement.sql);
    if !statement.returning {
        return executor.execute(statement.into()).await;
    }
    let mut affected = RowsAffected::default();
    let mut produced = None;
    {
        let mut results = pin!(executor.run(statement.into()));
        while let Some(result) = results.next().await {
            match result? {
                QueryResult::Row(row) => {
                    if produced.is_none() {
                        produced = Some(row);
                    }
                }
                QueryResult::Affected(v) => affected.extend([v]),
            }
        }
    }
    let row = produced.ok_or(Error::NotFound)?;
    *entity = E::from_row(&row)?;
    Ok(affected)
}

/// Update the columns selected by `options.set`, addressing rows by
/// `options.by`. The entity is read, never modified; there is no implicit
/// rescan of the stored row.
pub async fn update<E, X>(
    executor: &mut X,
    entity: &E,
    options: &UpdateOptions<'_>,
) -> Result<RowsAffected>
where
    E: Entity + Sync,
    X: Executor,
{
    let statement = update_statement(entity, options)?;
    trace!("{}", statement.sql);
    executor.execute(statement.into()).await
}

/// Run arbitrary SQL and scan the first result row into one entity.
/// Zero rows is [`Error::NotFound`].
pub async fn select_one<E, X>(executor: &mut X, sql: &str, args: Vec<Value>) -> Result<E>
where
    E: Entity + Send,
    X: Executor,
{
    let query = Query::new(sql, args);
    trace!("{query}");
    scan_one(executor.fetch(query)).await
}

/// True when the entity holds nothing but zero values, field for field, as
/// a freshly constructed instance would. Callers branch on this to tell a
/// populated entity from one that was never loaded.
pub fn is_zero<E>(entity: &E) -> bool
where
    E: Entity + Default + PartialEq,
{
    *entity == E::default()
}

/// Run arbitrary SQL and scan every result row into a sequence of entities,
/// in result order.
pub async fn select_many<E, X>(
    executor: &mut X,
    sql: &str,
    args: Vec<Value>,
) -> Result<Vec<E>>
where
    E: Entity + Send,
    X: Executor,
{
    let query = Query::new(sql, args);
    trace!("{query}");
    scan_many(executor.fetch(query)).await
}
