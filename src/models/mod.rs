//! Data models for the admin console.
//!
//! Field names serialize in camelCase so the console frontend can consume them unchanged.

mod admin;
mod clan;
mod community;
mod event;
mod ethnic_group;
mod family;
mod family_history;
mod news;
mod role;
mod status;
mod sub_clan;
mod verification;

pub use admin::*;
pub use clan::*;
pub use community::*;
pub use ethnic_group::*;
pub use event::*;
pub use family::*;
pub use family_history::*;
pub use news::*;
pub use role::*;
pub use status::*;
pub use sub_clan::*;
pub use verification::*;

use crate::errors::AppError;

/// Minimum length for names and titles entered through the console forms.
pub const MIN_NAME_LEN: usize = 3;

/// Reject values shorter than `min` characters once trimmed.
pub(crate) fn require_min_len(field: &str, value: &str, min: usize) -> Result<(), AppError> {
    if value.trim().chars().count() < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    Ok(())
}

pub(crate) fn require_present(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Loose e-mail check: one `@` with something on both sides and a dot in the domain.
pub(crate) fn require_email(value: &str) -> Result<(), AppError> {
    let valid = match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::Validation(format!(
            "{} is not a valid email address",
            value
        )));
    }
    Ok(())
}
