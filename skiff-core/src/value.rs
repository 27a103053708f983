use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Dynamically typed cell used for query arguments and row decoding.
///
/// Each variant carries an `Option` payload so a column can represent its
/// type while holding SQL NULL. `Value::Null` is the untyped absence used
/// for columns the result set reports but the destination does not map.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    Uuid(Option<Uuid>),
}

impl Value {
    /// True when the cell holds no data, either untyped `Null` or a typed
    /// variant with an empty payload.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int16(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Float32(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Date(v) => v.is_none(),
            Value::Time(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
            Value::TimestampWithTimezone(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
        }
    }
}
