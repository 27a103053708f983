use crate::{
    Query, QueryResult, Result, RowLabeled, RowsAffected,
    stream::{Stream, StreamExt, TryStreamExt},
};
use std::future::Future;

/// The injected database capability.
///
/// Any conforming client works: implement `run` to send the statement and
/// stream back rows and/or modify results. The engine never retains the
/// returned stream beyond a single operation; dropping it releases the
/// underlying cursor.
pub trait Executor: Send + Sized {
    /// General method to send any query and return any result type (either
    /// row or count).
    fn run(&mut self, query: Query) -> impl Stream<Item = Result<QueryResult>> + Send;

    /// Execute the query and return the rows.
    fn fetch(&mut self, query: Query) -> impl Stream<Item = Result<RowLabeled>> + Send {
        self.run(query).filter_map(|v| async move {
            match v {
                Ok(QueryResult::Row(v)) => Some(Ok(v)),
                Err(e) => Some(Err(e)),
                _ => None,
            }
        })
    }

    /// Execute the query and return the total number of rows affected.
    fn execute(&mut self, query: Query) -> impl Future<Output = Result<RowsAffected>> + Send {
        self.run(query)
            .filter_map(|v| async move {
                match v {
                    Ok(QueryResult::Affected(v)) => Some(Ok(v)),
                    Err(e) => Some(Err(e)),
                    _ => None,
                }
            })
            .try_collect()
    }
}
