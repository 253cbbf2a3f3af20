//! Route handlers grouped by scope

pub mod customer;
pub mod driver;
pub mod map;
pub mod session_flow;
pub mod valuation;
pub mod verify_code;

use validator::{Validate, ValidationErrors};

use dj_core::errors::{AuthError, DomainError, DomainResult};

/// Validate a request body, reporting a bad `telephone` as a phone format error
pub(crate) fn validate_body<T: Validate>(body: &T, telephone: Option<&str>) -> DomainResult<()> {
    body.validate().map_err(|errors| invalid_body(errors, telephone))
}

fn invalid_body(errors: ValidationErrors, telephone: Option<&str>) -> DomainError {
    match telephone {
        Some(phone) if errors.field_errors().contains_key("telephone") => {
            AuthError::InvalidPhoneFormat {
                phone: phone.to_string(),
            }
            .into()
        }
        _ => DomainError::Validation {
            message: errors.to_string(),
        },
    }
}
