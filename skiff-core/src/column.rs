/// How a field participates in statements and scans.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Included in the write set of INSERT/UPDATE and as a scan target.
    #[default]
    Writable,
    /// Value supplied by the database (identity keys, timestamps).
    /// Excluded from the write set, still a scan target so the caller's
    /// struct can be rehydrated with the produced value.
    Generated,
    /// Field carries no column mapping; invisible to SQL.
    Transient,
}

/// Declarative mapping of one entity field.
///
/// One `ColumnDef` per declared field, in declaration order. Transient
/// fields keep their slot (with an empty column name) so field-name lookups
/// can distinguish "no such field" from "field not mapped".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Rust field name.
    pub field: &'static str,
    /// Column name, empty for transient fields.
    pub name: &'static str,
    pub role: ColumnRole,
}

impl ColumnDef {
    pub fn is_writable(&self) -> bool {
        self.role == ColumnRole::Writable
    }
    /// Mapped columns (writable or generated) participate in scans.
    pub fn is_mapped(&self) -> bool {
        self.role != ColumnRole::Transient
    }
}
