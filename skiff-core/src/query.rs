use crate::Value;
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A statement ready to be executed: SQL text plus its positional arguments
/// in placeholder order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Query {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Query {
    pub fn new(sql: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::new(value, Vec::new())
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Query::new(value, Vec::new())
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy)]
pub struct RowsAffected {
    /// Total number of rows impacted.
    pub rows_affected: u64,
    /// Backend-specific last inserted / affected identifier when available.
    pub last_affected_id: Option<i64>,
}

impl Extend<RowsAffected> for RowsAffected {
    fn extend<T: IntoIterator<Item = RowsAffected>>(&mut self, iter: T) {
        for elem in iter {
            self.rows_affected += elem.rows_affected;
            if elem.last_affected_id.is_some() {
                self.last_affected_id = elem.last_affected_id;
            }
        }
    }
}

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(names: RowNames, values: Row) -> Self {
        Self {
            labels: names,
            values,
        }
    }
}

/// Heterogeneous items emitted by `Executor::run` combining rows and modify
/// results.
#[derive(Debug)]
pub enum QueryResult {
    /// A labeled row.
    Row(RowLabeled),
    /// A modify effect aggregation.
    Affected(RowsAffected),
}

impl From<RowLabeled> for QueryResult {
    fn from(value: RowLabeled) -> Self {
        QueryResult::Row(value)
    }
}

impl From<RowsAffected> for QueryResult {
    fn from(value: RowsAffected) -> Self {
        QueryResult::Affected(value)
    }
}
