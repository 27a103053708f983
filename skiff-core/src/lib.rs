mod as_value;
mod column;
mod entity;
mod error;
mod executor;
mod ops;
mod query;
mod scan;
mod statement;
mod value;

pub use as_value::*;
pub use column::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use ops::*;
pub use query::*;
pub use scan::*;
pub use statement::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
