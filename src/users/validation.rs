use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::users::model::NewUser;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Input rejected before any backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and email are required")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid user ID")]
    InvalidUserId,
    #[error("page must be at least 1")]
    InvalidPage,
    #[error("page_size must be between 1 and 100")]
    InvalidPageSize,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Form-level check used by the create view: both fields present, email has an `@`.
///
/// Returns the trimmed request on success.
pub fn check_create_form(name: &str, email: &str) -> Result<NewUser, ValidationError> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(NewUser::new(name, email))
}

/// Stricter check applied by the REST routes before forwarding a create.
pub fn validate_new_user(req: &NewUser) -> Result<NewUser, ValidationError> {
    let checked = check_create_form(&req.name, &req.email)?;
    if !is_valid_email(&checked.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(checked)
}

/// Parses a user id typed into a search box.
pub fn parse_user_id(input: &str) -> Result<u64, ValidationError> {
    match input.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id as u64),
        _ => Err(ValidationError::InvalidUserId),
    }
}

pub fn validate_user_id(id: i64) -> Result<u64, ValidationError> {
    if id > 0 {
        Ok(id as u64)
    } else {
        Err(ValidationError::InvalidUserId)
    }
}

pub fn validate_pagination(page: i64, page_size: i64) -> Result<(u32, u32), ValidationError> {
    if page < 1 || page > u32::MAX as i64 {
        return Err(ValidationError::InvalidPage);
    }
    if page_size < 1 || page_size > MAX_PAGE_SIZE as i64 {
        return Err(ValidationError::InvalidPageSize);
    }
    Ok((page as u32, page_size as u32))
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn create_form_requires_both_fields() {
        assert_eq!(
            check_create_form("   ", "a@b.c").unwrap_err(),
            ValidationError::MissingFields
        );
        assert_eq!(
            check_create_form("Ann", "").unwrap_err(),
            ValidationError::MissingFields
        );
    }

    #[test]
    fn create_form_only_needs_an_at_sign() {
        assert_eq!(
            check_create_form("Ann", "ann.example.com").unwrap_err(),
            ValidationError::InvalidEmail
        );
        let req = check_create_form("  Ann ", " ann@local ").unwrap();
        assert_eq!(req, NewUser::new("Ann", "ann@local"));
    }

    #[test]
    fn server_side_email_check_is_stricter() {
        let err = validate_new_user(&NewUser::new("Ann", "ann@local")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert!(validate_new_user(&NewUser::new("Ann", "ann@example.com")).is_ok());
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn user_id_must_be_positive_integer() {
        assert_eq!(parse_user_id("42"), Ok(42));
        assert_eq!(parse_user_id(" 7 "), Ok(7));
        assert_eq!(parse_user_id("0"), Err(ValidationError::InvalidUserId));
        assert_eq!(parse_user_id("-3"), Err(ValidationError::InvalidUserId));
        assert_eq!(parse_user_id("abc"), Err(ValidationError::InvalidUserId));
        assert_eq!(parse_user_id(""), Err(ValidationError::InvalidUserId));
        assert_eq!(validate_user_id(0), Err(ValidationError::InvalidUserId));
    }

    #[test]
    fn pagination_limits() {
        assert_eq!(validate_pagination(1, 10), Ok((1, 10)));
        assert_eq!(validate_pagination(0, 10), Err(ValidationError::InvalidPage));
        assert_eq!(validate_pagination(1, 0), Err(ValidationError::InvalidPageSize));
        assert_eq!(validate_pagination(1, 150), Err(ValidationError::InvalidPageSize));
        assert_eq!(validate_pagination(2, 100), Ok((2, 100)));
    }
}
