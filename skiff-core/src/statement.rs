use crate::{ColumnRole, Entity, Error, Query, Result, Value};
use std::fmt::Write;

/// A built SQL statement: text, positional arguments in placeholder order,
/// and whether the text requests the full row back.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<Value>,
    /// The statement ends with `RETURNING *` and must be run through the
    /// row-producing path so the result can be scanned back into the entity.
    pub returning: bool,
}

impl From<Statement> for Query {
    fn from(value: Statement) -> Self {
        Query::new(value.sql, value.args)
    }
}

/// Field-name lists steering an UPDATE.
///
/// `set` enumerates the fields allowed to be written; `by` enumerates the
/// fields forming the WHERE predicate. A field named in `by` is never
/// written, even if it also appears in `set`.
#[derive(Default, Debug, Clone, Copy)]
pub struct UpdateOptions<'a> {
    pub set: &'a [&'a str],
    pub by: &'a [&'a str],
}

/// Build a parameterized INSERT for the entity's current field values.
///
/// The write set is every writable column in declaration order. Generated
/// columns are left to the database and make the statement `RETURNING *`,
/// so the caller can rehydrate the entity from the produced row. With no
/// writable column at all the statement inserts a row of defaults.
pub fn insert_statement<E: Entity>(entity: &E) -> Statement {
    let mut args = Vec::new();
    let mut names = String::new();
    let mut placeholders = String::new();
    let mut returning = false;
    // Names and arguments are collected in the same pass: placeholder
    // numbers and argument positions must never drift apart.
    for (def, value) in E::columns().iter().zip(entity.row()) {
        match def.role {
            ColumnRole::Transient => {}
            ColumnRole::Generated => returning = true,
            ColumnRole::Writable => {
                if !args.is_empty() {
                    names.push_str(", ");
                    placeholders.push_str(", ");
                }
                args.push(value);
                names.push_str(def.name);
                let _ = write!(placeholders, "${}", args.len());
            }
        }
    }
    let mut sql = format!("INSERT INTO {}", E::table_name());
    if args.is_empty() {
        sql.push_str(" DEFAULT VALUES");
    } else {
        let _ = write!(sql, " ({names}) VALUES ({placeholders})");
    }
    if returning {
        sql.push_str(" RETURNING *");
    }
    Statement {
        sql,
        args,
        returning,
    }
}

/// Build a parameterized UPDATE steered by [`UpdateOptions`].
///
/// SET lists the writable columns named in `set` (minus `by`), in
/// declaration order. WHERE resolves each `by` name against the declared
/// fields, in the order the caller gave, continuing the placeholder
/// numbering after the SET list. Resolution failures are returned before
/// anything is sent. An empty `set` selection produces an empty SET clause.
pub fn update_statement<E: Entity>(entity: &E, options: &UpdateOptions<'_>) -> Result<Statement> {
    let columns = E::columns();
    let row = entity.row();
    let mut args = Vec::new();
    let mut sql = format!("UPDATE {} SET", E::table_name());
    let mut first = true;
    for (def, value) in columns.iter().zip(row.iter()) {
        if !def.is_writable()
            || !options.set.contains(&def.field)
            || options.by.contains(&def.field)
        {
            continue;
        }
        sql.push_str(if first { " " } else { ", " });
        first = false;
        args.push(value.clone());
        let _ = write!(sql, "{} = ${}", def.name, args.len());
    }
    let mut first = true;
    for field in options.by {
        let index = columns
            .iter()
            .position(|c| c.field == *field)
            .ok_or_else(|| Error::FieldNotFound((*field).to_owned()))?;
        let def = &columns[index];
        if !def.is_mapped() {
            return Err(Error::FieldNotAnnotated((*field).to_owned()));
        }
        sql.push_str(if first { " WHERE " } else { " AND " });
        first = false;
        args.push(row[index].clone());
        let _ = write!(sql, "{} = ${}", def.name, args.len());
    }
    Ok(Statement {
        sql,
        args,
        returning: false,
    })
}
