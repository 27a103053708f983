//! Skiff: a small data mapper between annotated structs and a relational
//! database client.
//!
//! Field annotations drive everything: the table name, the column list and
//! each column's role. From those, skiff synthesizes parameterized INSERT
//! and UPDATE statements and hydrates result rows back into structs, over
//! any injected [`Executor`] capability.
//!
//! ```rust,ignore
//! use skiff::{Entity, UpdateOptions};
//!
//! #[derive(Entity, Default)]
//! struct Event {
//!     #[skiff(table = "events", column = "position", generated)]
//!     position: i64,
//!     #[skiff(column = "label")]
//!     label: String,
//! }
//!
//! let mut event = Event { label: "created".into(), ..Default::default() };
//! skiff::insert(&mut client, &mut event).await?;
//! // event.position now holds the database-generated value
//! skiff::update(&mut client, &event, &UpdateOptions { set: &["label"], by: &["position"] }).await?;
//! let events: Vec<Event> = skiff::select_many(&mut client, "SELECT * FROM events", vec![]).await?;
//! ```

pub use skiff_core::*;
pub use skiff_macros::Entity;
