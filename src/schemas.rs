//! Form Validation Schemas
//!
//! Pure, stateless validators for the auth and profile forms. Each
//! validator returns every failing field so the UI can render per-field
//! messages before anything is submitted.

/// One failed rule on one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

pub const USERNAME_TOO_SHORT: &str = "Username must have at least 2 characters";
pub const FIRST_NAME_TOO_SHORT: &str = "First name must have at least 2 characters";
pub const LAST_NAME_TOO_SHORT: &str = "Last name must have at least 2 characters";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORD_NO_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NO_NUMBER: &str = "Password must contain at least one number";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Sign-up form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Profile "general info" form values; empty fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileGeneralsForm {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

pub fn validate_sign_up(form: &SignUpForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_min_len(&mut errors, "username", &form.username, USERNAME_TOO_SHORT);
    check_min_len(&mut errors, "firstName", &form.first_name, FIRST_NAME_TOO_SHORT);
    check_min_len(&mut errors, "lastName", &form.last_name, LAST_NAME_TOO_SHORT);
    check_email(&mut errors, &form.email);
    check_password(&mut errors, &form.password);
    if form.password != form.confirm_password {
        errors.push(FieldError::new("confirmPassword", PASSWORDS_DO_NOT_MATCH));
    }
    finish(errors)
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    finish(errors)
}

pub fn validate_profile_generals(form: &ProfileGeneralsForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if let Some(username) = &form.username {
        check_min_len(&mut errors, "username", username, USERNAME_TOO_SHORT);
    }
    if let Some(first_name) = &form.first_name {
        check_min_len(&mut errors, "firstName", first_name, FIRST_NAME_TOO_SHORT);
    }
    if let Some(last_name) = &form.last_name {
        check_min_len(&mut errors, "lastName", last_name, LAST_NAME_TOO_SHORT);
    }
    if let Some(email) = &form.email {
        check_email(&mut errors, email);
    }
    finish(errors)
}

pub fn validate_profile_password(password: &str, confirm: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_password(&mut errors, password);
    if password != confirm {
        errors.push(FieldError::new("confirmPassword", PASSWORDS_DO_NOT_MATCH));
    }
    finish(errors)
}

/// First error message for a field, for inline display
pub fn field_message<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_min_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) {
    if value.chars().count() < 2 {
        errors.push(FieldError::new(field, message));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if !is_valid_email(value) {
        errors.push(FieldError::new("email", EMAIL_INVALID));
    }
}

/// All failing password rules are reported, not just the first
fn check_password(errors: &mut Vec<FieldError>, value: &str) {
    if value.chars().count() < 8 {
        errors.push(FieldError::new("password", PASSWORD_TOO_SHORT));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new("password", PASSWORD_NO_UPPERCASE));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(FieldError::new("password", PASSWORD_NO_LOWERCASE));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("password", PASSWORD_NO_NUMBER));
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sign_up() -> SignUpForm {
        SignUpForm {
            username: "maria".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Rossi".to_string(),
            email: "maria@example.com".to_string(),
            password: "Passw0rd".to_string(),
            confirm_password: "Passw0rd".to_string(),
        }
    }

    #[test]
    fn valid_sign_up_passes() {
        assert_eq!(validate_sign_up(&valid_sign_up()), Ok(()));
    }

    #[test]
    fn short_username_is_rejected() {
        let mut form = valid_sign_up();
        form.username = "m".to_string();
        let errors = validate_sign_up(&form).unwrap_err();
        assert_eq!(field_message(&errors, "username"), Some(USERNAME_TOO_SHORT));
    }

    #[test]
    fn password_rules_all_reported() {
        let mut form = valid_sign_up();
        form.password = "short".to_string();
        form.confirm_password = "short".to_string();
        let errors = validate_sign_up(&form).unwrap_err();
        let messages: Vec<_> = errors
            .iter()
            .filter(|e| e.field == "password")
            .map(|e| e.message)
            .collect();
        assert_eq!(
            messages,
            vec![PASSWORD_TOO_SHORT, PASSWORD_NO_UPPERCASE, PASSWORD_NO_NUMBER]
        );
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut form = valid_sign_up();
        form.confirm_password = "Different1".to_string();
        let errors = validate_sign_up(&form).unwrap_err();
        assert_eq!(
            field_message(&errors, "confirmPassword"),
            Some(PASSWORDS_DO_NOT_MATCH)
        );
    }

    #[test]
    fn email_shapes() {
        for bad in ["", "plain", "@nodomain.com", "user@", "user@nodot", "a b@x.com"] {
            assert!(!is_valid_email(bad), "should reject {bad:?}");
        }
        for good in ["a@b.c", "user.name@example.co.uk"] {
            assert!(is_valid_email(good), "should accept {good:?}");
        }
    }

    #[test]
    fn sign_in_checks_both_fields() {
        let errors = validate_sign_in("bad", "bad").unwrap_err();
        assert!(field_message(&errors, "email").is_some());
        assert!(field_message(&errors, "password").is_some());
        assert_eq!(validate_sign_in("a@b.c", "Passw0rd!"), Ok(()));
    }

    #[test]
    fn profile_generals_skips_absent_fields() {
        let form = ProfileGeneralsForm::default();
        assert_eq!(validate_profile_generals(&form), Ok(()));

        let form = ProfileGeneralsForm {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        let errors = validate_profile_generals(&form).unwrap_err();
        assert_eq!(field_message(&errors, "email"), Some(EMAIL_INVALID));
    }

    #[test]
    fn profile_password_requires_match() {
        assert_eq!(validate_profile_password("Passw0rd", "Passw0rd"), Ok(()));
        let errors = validate_profile_password("Passw0rd", "Other1pw").unwrap_err();
        assert_eq!(
            field_message(&errors, "confirmPassword"),
            Some(PASSWORDS_DO_NOT_MATCH)
        );
    }
}
