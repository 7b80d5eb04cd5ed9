//! Belongings domain model and rules
//!
//! - `location`: closed `Location` and `Category` enums plus `LocationFilter`
//! - `item`: the `Item` record, `ItemDraft` for creation, `ItemPatch` for edits
//! - `derivation`: location-implied flag rules
//! - `store`: `ItemStore`, the only owner allowed to mutate items
//! - `views`: pure filtering, grouping and counting over the collection

mod derivation;
mod item;
mod location;
mod store;
pub mod views;

pub use derivation::derive_flags;
pub use item::{Flags, Item, ItemDraft, ItemPatch};
pub use location::{Category, Location, LocationFilter};
pub use store::ItemStore;
pub use views::{ItemQuery, LocationStats, ReminderSource, ViewConfig, ViewMode};
