//! Request validation for customer payloads.

use crate::error::AppError;
use crate::model::{CustomerRegistrationRequest, CustomerUpdateRequest};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+$";

pub struct RequestValidator;

impl RequestValidator {
    /// All fields are required for registration.
    pub fn validate_registration(request: &CustomerRegistrationRequest) -> Result<(), AppError> {
        validate_name(&request.name)?;
        validate_email(&request.email)
    }

    /// Validate only the fields present in the update.
    pub fn validate_update(request: &CustomerUpdateRequest) -> Result<(), AppError> {
        if let Some(name) = &request.name {
            validate_name(name)?;
        }
        if let Some(email) = &request.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    let re = Regex::new(EMAIL_PATTERN).map_err(|_| AppError::Validation("invalid email pattern".into()))?;
    if !re.is_match(email) {
        return Err(AppError::Validation("email must be a valid email".into()));
    }
    Ok(())
}
