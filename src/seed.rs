//! Startup seeding with generated customers.

use crate::error::AppError;
use crate::model::{Customer, CustomerRegistrationRequest};
use crate::service::CustomerService;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Ali", "Amara", "Ben", "Chloe", "Dmitri", "Elena", "Farah", "Hugo", "Ines", "Jonas",
    "Keiko", "Liam", "Maya", "Noor", "Omar", "Priya", "Sam", "Tomas", "Yara",
];

const LAST_NAMES: &[&str] = &[
    "Armand", "Berg", "Costa", "Diallo", "Evans", "Fischer", "Garcia", "Haddad", "Ito", "Jensen",
    "Kowalski", "Lopez", "Moreau", "Nakamura", "Okafor", "Petrov", "Rossi", "Silva", "Tanaka",
];

/// A registration with a plausible name, a practically unique email, and an age in 16..99.
pub fn random_registration() -> CustomerRegistrationRequest {
    let token = uuid::Uuid::new_v4();
    let bytes = token.as_bytes();
    let first = FIRST_NAMES[bytes[0] as usize % FIRST_NAMES.len()];
    let last = LAST_NAMES[bytes[1] as usize % LAST_NAMES.len()];
    let age = 16 + i32::from(bytes[2]) % 83;
    let suffix: String = token.simple().to_string().chars().take(8).collect();
    CustomerRegistrationRequest {
        name: format!("{} {}", first, last),
        email: format!(
            "{}.{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            suffix
        ),
        age,
    }
}

/// Register `count` generated customers through the normal service path.
pub async fn seed_customers(service: &CustomerService, count: u32) -> Result<Vec<Customer>, AppError> {
    let mut seeded = Vec::with_capacity(count as usize);
    for _ in 0..count {
        seeded.push(service.register(random_registration()).await?);
    }
    tracing::info!(count = seeded.len(), "seeded customers");
    Ok(seeded)
}
