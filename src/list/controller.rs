//! In-memory collection with view derivation and mutations.

use chrono::Utc;
use serde_json::Value;

use super::{compute_view, Entity, FilterCriteria, Notification, Toggleable, View};
use crate::errors::AppError;
use crate::models::Status;

/// Fields no patch may overwrite on any entity. Status only moves through
/// `toggle_status` or the review workflow.
const IMMUTABLE_FIELDS: &[&str] = &["id", "createdAt", "status"];

/// Outcome of a successful mutation.
#[derive(Debug, Clone)]
pub struct Mutation<T> {
    pub entity: T,
    pub notification: Notification,
    /// Collection revision after the mutation.
    pub revision: i64,
}

/// Owner of one entity collection.
///
/// Records keep insertion order. Updates replace in place and removals keep
/// the relative order of the remaining records.
#[derive(Debug, Clone)]
pub struct ListController<T: Entity> {
    items: Vec<T>,
    criteria: FilterCriteria,
    page_size: usize,
    revision: i64,
}

impl<T: Entity> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ListController<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            criteria: FilterCriteria::default(),
            page_size: T::PAGE_SIZE,
            revision: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> i64 {
        self.revision
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Fetch a record or fail with `NotFound`.
    pub fn find(&self, id: &str) -> Result<&T, AppError> {
        self.get(id).ok_or_else(|| not_found::<T>(id))
    }

    // ==================== CRITERIA ====================

    /// Replace the search term and go back to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.criteria.page = 1;
    }

    /// Replace one dropdown filter and go back to the first page.
    pub fn set_field_filter(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), AppError> {
        let field = field.into();
        if !T::FILTER_FIELDS.contains(&field.as_str()) {
            return Err(AppError::Validation(format!(
                "Cannot filter {} by {}",
                T::COLLECTION,
                field
            )));
        }
        self.criteria.field_filters.insert(field, value.into());
        self.criteria.page = 1;
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn set_page(&mut self, page: usize) {
        self.criteria.page = page;
    }

    /// View under the controller's own criteria.
    pub fn view(&self) -> Result<View<T>, AppError> {
        self.view_with(&self.criteria)
    }

    /// View under caller-supplied criteria.
    pub fn view_with(&self, criteria: &FilterCriteria) -> Result<View<T>, AppError> {
        compute_view(&self.items, criteria, self.page_size)
    }

    // ==================== MUTATIONS ====================

    /// Append a new record built from `draft`.
    pub fn add(&mut self, draft: T::Draft) -> Result<Mutation<T>, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let entity = T::from_draft(id, Utc::now(), draft);
        entity.validate()?;

        self.items.push(entity.clone());
        self.revision += 1;
        tracing::info!(kind = T::KIND, id = entity.id(), "created");

        let notification = Notification::success(
            format!("{} created", T::KIND),
            format!("{} has been added.", entity.label()),
        );
        Ok(self.mutation(entity, notification))
    }

    /// Shallow-merge `patch` over the record with `id`.
    pub fn update(&mut self, id: &str, patch: &Value) -> Result<Mutation<T>, AppError> {
        let index = self.position(id)?;
        let merged = merge_patch(&self.items[index], patch)?;
        merged.validate()?;

        self.items[index] = merged.clone();
        self.revision += 1;
        tracing::info!(kind = T::KIND, id, "updated");

        let notification = Notification::success(
            format!("{} updated", T::KIND),
            format!("{} has been updated.", merged.label()),
        );
        Ok(self.mutation(merged, notification))
    }

    /// Remove the record with `id`.
    pub fn remove(&mut self, id: &str) -> Result<Mutation<T>, AppError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.revision += 1;
        tracing::info!(kind = T::KIND, id, "deleted");

        let notification = Notification::destructive(
            format!("{} deleted", T::KIND),
            format!("{} has been removed.", removed.label()),
        );
        Ok(self.mutation(removed, notification))
    }

    /// Run `change` against a copy of the record and keep it only if both
    /// `change` and validation succeed.
    pub fn apply<F>(&mut self, id: &str, change: F) -> Result<(T, i64), AppError>
    where
        F: FnOnce(&mut T) -> Result<(), AppError>,
    {
        let index = self.position(id)?;
        let mut candidate = self.items[index].clone();
        change(&mut candidate)?;
        candidate.validate()?;

        self.items[index] = candidate.clone();
        self.revision += 1;
        Ok((candidate, self.revision))
    }

    fn position(&self, id: &str) -> Result<usize, AppError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| not_found::<T>(id))
    }

    fn mutation(&self, entity: T, notification: Notification) -> Mutation<T> {
        Mutation {
            entity,
            notification,
            revision: self.revision,
        }
    }
}

impl<T: Toggleable> ListController<T> {
    /// Flip the record between active and inactive.
    pub fn toggle_status(
        &mut self,
        id: &str,
        reason: Option<String>,
    ) -> Result<Mutation<T>, AppError> {
        let reason = reason
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());
        let (entity, _) = self.apply(id, |item| {
            let next = item.status().toggled();
            item.set_status(next, reason.clone());
            Ok(())
        })?;
        tracing::info!(kind = T::KIND, id, status = entity.status().as_str(), "status changed");

        let notification = match entity.status() {
            Status::Active => Notification::success(
                format!("{} activated", T::KIND),
                format!("{} is active again.", entity.label()),
            ),
            Status::Inactive => {
                let mut description = format!("{} has been suspended.", entity.label());
                if let Some(reason) = &reason {
                    description.push_str(&format!(" Reason: {}", reason));
                }
                Notification::destructive(format!("{} suspended", T::KIND), description)
            }
        };
        Ok(self.mutation(entity, notification))
    }

    pub fn count_active(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status().is_active())
            .count()
    }
}

fn not_found<T: Entity>(id: &str) -> AppError {
    AppError::NotFound(format!("{} {} not found", T::KIND, id))
}

/// `{...entity, ...patch}` restricted to fields the entity already has.
fn merge_patch<T: Entity>(entity: &T, patch: &Value) -> Result<T, AppError> {
    let Value::Object(changes) = patch else {
        return Err(AppError::BadRequest("Patch must be a JSON object".to_string()));
    };

    let mut merged = serde_json::to_value(entity)?;
    let Value::Object(fields) = &mut merged else {
        return Err(AppError::Internal(format!(
            "{} does not serialize to an object",
            T::KIND
        )));
    };

    for (key, value) in changes {
        let Some(current) = fields.get(key) else {
            return Err(AppError::Validation(format!(
                "{} has no field {}",
                T::KIND,
                key
            )));
        };
        let locked = IMMUTABLE_FIELDS.contains(&key.as_str())
            || T::PROTECTED_FIELDS.contains(&key.as_str());
        if locked {
            // Forms echo read-only fields back unchanged; only a real change is an error.
            if current != value {
                return Err(AppError::Validation(format!("{} cannot be changed", key)));
            }
            continue;
        }
        fields.insert(key.clone(), value.clone());
    }

    serde_json::from_value(merged)
        .map_err(|e| AppError::Validation(format!("Invalid {} update: {}", T::KIND, e)))
}
