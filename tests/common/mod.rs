#![allow(dead_code)]

use skiff::{
    Entity, Error, Query, QueryResult, Result, RowLabeled, RowNames, RowsAffected, Value, stream,
};
use log::LevelFilter;
use std::{collections::VecDeque, env};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger.is_test(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Shared entity fixtures, one per shape the engine distinguishes.
#[derive(Entity, Debug, Default, Clone, PartialEq)]
pub struct Sample {
    #[skiff(table = "samples", column = "id")]
    pub id: String,
    #[skiff(column = "label")]
    pub label: String,
}

#[derive(Entity, Debug, Default, Clone, PartialEq)]
pub struct Event {
    #[skiff(table = "events", column = "position", generated)]
    pub position: i64,
    #[skiff(column = "label")]
    pub label: String,
}

#[derive(Entity, Debug, Default, Clone, PartialEq)]
pub struct User {
    #[skiff(table = "users", column = "id")]
    pub id: String,
    #[skiff(column = "email")]
    pub email: String,
    #[skiff(column = "token")]
    pub token: String,
    pub session: u64,
}

/// Scripted stand-in for the database client: every `run` records the query
/// it was handed and replays the next scripted result batch.
#[derive(Default)]
pub struct MockExecutor {
    pub queries: Vec<Query>,
    scripts: VecDeque<Vec<Result<QueryResult>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returns(mut self, results: Vec<Result<QueryResult>>) -> Self {
        self.scripts.push_back(results);
        self
    }

    pub fn sql(&self, index: usize) -> &str {
        &self.queries[index].sql
    }
}

impl skiff::Executor for MockExecutor {
    fn run(&mut self, query: Query) -> impl stream::Stream<Item = Result<QueryResult>> + Send {
        self.queries.push(query);
        stream::iter(self.scripts.pop_front().unwrap_or_default())
    }
}

pub fn labels(names: &[&str]) -> RowNames {
    names.iter().map(|v| (*v).to_owned()).collect()
}

pub fn row(names: &[&str], values: Vec<Value>) -> Result<QueryResult> {
    Ok(QueryResult::Row(RowLabeled::new(
        labels(names),
        values.into(),
    )))
}

pub fn affected(rows: u64) -> Result<QueryResult> {
    Ok(QueryResult::Affected(RowsAffected {
        rows_affected: rows,
        last_affected_id: None,
    }))
}

pub fn driver_error(message: &str) -> Result<QueryResult> {
    Err(Error::Driver(anyhow::Error::msg(message.to_owned())))
}

pub fn database_error(sqlstate: &str, message: &str) -> Result<QueryResult> {
    Err(Error::Database {
        sqlstate: Some(sqlstate.to_owned()),
        message: message.to_owned(),
    })
}
