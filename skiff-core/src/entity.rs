use crate::{ColumnDef, Result, Row, RowLabeled};

/// A struct mapped to a single table through field annotations.
///
/// Implemented by `#[derive(Entity)]`. The derive reads the table name from
/// the annotation on the first declared field, builds one [`ColumnDef`] per
/// field in declaration order, and generates the value extraction and row
/// hydration the engine runs on.
pub trait Entity: Sized {
    /// Table name, used verbatim in emitted SQL.
    fn table_name() -> &'static str;

    /// Column metadata for every declared field, in declaration order.
    fn columns() -> &'static [ColumnDef];

    /// Current field values, one per [`ColumnDef`] slot and aligned with it.
    /// Transient slots hold `Value::Null` and are never read.
    fn row(&self) -> Row;

    /// Build an instance from a labeled result row.
    ///
    /// Columns are matched to fields by declared column name, first match
    /// wins. Unmatched columns and SQL NULLs are discarded the same way,
    /// leaving the field at its `Default` value. A non-null value that does
    /// not convert into the field's type is an error.
    fn from_row(row: &RowLabeled) -> Result<Self>;
}
