//! Partial-update merge: decides what a `CustomerUpdateRequest` actually changes.

use crate::error::AppError;
use crate::model::{Customer, CustomerUpdateRequest};
use crate::store::CustomerStore;

/// Fields of an update request that differ from the stored customer.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StagedChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl StagedChanges {
    /// Keep only supplied values that differ from `current`.
    pub fn stage(current: &Customer, request: &CustomerUpdateRequest) -> Self {
        StagedChanges {
            name: changed(&current.name, request.name.as_ref()).cloned(),
            email: changed(&current.email, request.email.as_ref()).cloned(),
            age: changed(&current.age, request.age.as_ref()).copied(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }

    /// `current` with the staged fields overwritten. The id is carried over untouched.
    pub fn apply_to(self, current: &Customer) -> Customer {
        Customer {
            id: current.id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            age: self.age.unwrap_or(current.age),
        }
    }
}

fn changed<'a, T: PartialEq + ?Sized>(current: &T, requested: Option<&'a T>) -> Option<&'a T> {
    requested.filter(|v| *v != current)
}

/// Merge `request` into `current`.
///
/// A new email is checked against the store first; an email equal to the current one is not a
/// change and is never reported as taken. Fails with `NoChangesRequested` when nothing differs.
/// Never writes.
pub async fn merge_update(
    store: &dyn CustomerStore,
    current: &Customer,
    request: &CustomerUpdateRequest,
) -> Result<Customer, AppError> {
    let staged = StagedChanges::stage(current, request);
    if let Some(email) = staged.email.as_deref() {
        if store.exists_by_email(email).await? {
            return Err(AppError::DuplicateEmail(email.to_string()));
        }
    }
    if staged.is_empty() {
        return Err(AppError::NoChangesRequested);
    }
    Ok(staged.apply_to(current))
}
