//! Generic list management shared by every console collection.
//!
//! Each collection is a [`ListController`] over one [`Entity`] type. The
//! controller owns the records in insertion order, derives a filtered and
//! paginated [`View`] on demand and applies mutations, each of which yields a
//! [`Notification`] for the operator.

mod controller;
mod notification;
mod view;

pub use controller::*;
pub use notification::*;
pub use view::*;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;
use crate::models::Status;

/// A record type managed by a [`ListController`].
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create-form payload.
    type Draft: DeserializeOwned + Send + 'static;

    /// Human readable singular name, e.g. "Ethnic group".
    const KIND: &'static str;
    /// URL segment of the collection, e.g. "ethnic-groups".
    const COLLECTION: &'static str;
    /// Rows per page on the console screen.
    const PAGE_SIZE: usize;
    /// Fields accepted as exact-match filters.
    const FILTER_FIELDS: &'static [&'static str];
    /// Serialized field names a patch may not overwrite, besides `id` and `createdAt`.
    const PROTECTED_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> &str;

    /// Name shown in notifications.
    fn label(&self) -> &str;

    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Current value of a filterable field, `None` for unsupported fields.
    fn filter_value(&self, field: &str) -> Option<String>;

    /// Build a record from a draft, filling in defaulted fields.
    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    fn validate(&self) -> Result<(), AppError>;
}

/// An entity whose [`Status`] flips between active and inactive.
pub trait Toggleable: Entity {
    fn status(&self) -> Status;

    /// Set the status. Entities that keep a reason record it, others ignore it.
    fn set_status(&mut self, status: Status, reason: Option<String>);
}
