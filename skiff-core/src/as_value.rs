use crate::{Error, Result, Value};
use rust_decimal::Decimal;
use std::any;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// representation that backs query parameters and row decoding.
///
/// Implementations accept the canonical `Value` variant for the type and may
/// accept narrower numeric variants with a widening cast. Anything else is a
/// decode error carrying both sides of the mismatch.
pub trait AsValue {
    /// A NULL-like value of this type's variant. Never allocates.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

macro_rules! impl_as_value {
    ($source:ty, $variant:path $(, $pat:pat => $expr:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $variant(None)
            }
            fn as_value(self) -> Value {
                $variant(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $variant(Some(v)) => Ok(v),
                    $($pat => $expr,)*
                    other => Err(Error::Decode(format!(
                        "cannot convert {other:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(bool, Value::Boolean);
impl_as_value!(i16, Value::Int16);
impl_as_value!(
    i32,
    Value::Int32,
    Value::Int16(Some(v)) => Ok(v as i32),
);
impl_as_value!(
    i64,
    Value::Int64,
    Value::Int32(Some(v)) => Ok(v as i64),
    Value::Int16(Some(v)) => Ok(v as i64),
);
impl_as_value!(f32, Value::Float32);
impl_as_value!(
    f64,
    Value::Float64,
    Value::Float32(Some(v)) => Ok(v as f64),
);
impl_as_value!(Decimal, Value::Decimal);
impl_as_value!(String, Value::Varchar);
impl_as_value!(Box<[u8]>, Value::Blob);
impl_as_value!(Date, Value::Date);
impl_as_value!(Time, Value::Time);
impl_as_value!(PrimitiveDateTime, Value::Timestamp);
impl_as_value!(OffsetDateTime, Value::TimestampWithTimezone);
impl_as_value!(Uuid, Value::Uuid);

impl AsValue for &str {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.to_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Err(Error::Decode(format!(
            "cannot borrow {value:?} as &str, decode into String instead"
        )))
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::try_from_value(value).map(Some)
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        <Box<[u8]>>::try_from_value(value).map(Into::into)
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}
