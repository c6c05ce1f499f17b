use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

#[derive(Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
}

pub fn validate_contact(req: &ContactRequest) -> Result<(), AppError> {
    let name = req.name.trim();
    if name.is_empty() || name.chars().count() > 120 {
        return Err(AppError::Validation("Name must be 1-120 characters".into()));
    }
    if !is_valid_email(&req.email) {
        return Err(AppError::Validation("Invalid email format".into()));
    }
    if let Some(ref subject) = req.subject
        && subject.trim().chars().count() > 200
    {
        return Err(AppError::Validation(
            "Subject must be at most 200 characters".into(),
        ));
    }
    let message = req.message.trim();
    if message.is_empty() || message.chars().count() > 5000 {
        return Err(AppError::Validation(
            "Message must be 1-5000 characters".into(),
        ));
    }
    Ok(())
}

/// Loose shape check: one `@`, a dot in the domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !email.chars().any(char::is_whitespace)
}
