//! Form field validation shared by the write paths.

use crate::error::DomainError;

pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().len() < 3 {
        return Err(DomainError::Validation(
            "Title should be at least 3 characters long".to_string(),
        ));
    }
    Ok(())
}

/// Slugs are URL-safe: lowercase alphanumerics and hyphens, non-empty.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.is_empty() {
        return Err(DomainError::Validation("Slug is required".to_string()));
    }
    let ok = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        return Err(DomainError::Validation(
            "Slug may only contain lowercase letters, digits and hyphens".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.trim().len() < 3 {
        return Err(DomainError::Validation(
            "Username should be at least 3 characters long".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.len() < 8 {
        return Err(DomainError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_enquiry(name: &str, email: &str, message: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Name is required".to_string()));
    }
    validate_email(email)?;
    if message.trim().is_empty() {
        return Err(DomainError::Validation("Message is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_rejected() {
        assert!(validate_title("ab").is_err());
        assert!(validate_title("abc").is_ok());
    }

    #[test]
    fn slug_must_be_url_safe() {
        assert!(validate_slug("shipping-rust-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Spaces").is_err());
        assert!(validate_slug("UPPER").is_err());
    }

    #[test]
    fn enquiry_requires_all_fields() {
        assert!(validate_enquiry("Dave", "dave@example.com", "hi").is_ok());
        assert!(validate_enquiry("", "dave@example.com", "hi").is_err());
        assert!(validate_enquiry("Dave", "not-an-email", "hi").is_err());
        assert!(validate_enquiry("Dave", "dave@example.com", " ").is_err());
    }
}
