//! CustomerService: customer operations over a `CustomerStore`.

mod customer;
pub mod update;
mod validation;
pub use customer::CustomerService;
pub use update::{merge_update, StagedChanges};
pub use validation::RequestValidator;
