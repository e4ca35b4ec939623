use crate::RegisterRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field that failed validation, with the text shown under it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Message for `field`, if it failed
pub fn error_for(errors: &[FieldError], field: &str) -> Option<&'static str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message)
}

/// Loose address check: one `@`, a non-empty local part without spaces, and a
/// domain of dot-separated alphanumeric/hyphen labels.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }

    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    let email = email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email é obrigatório"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Por favor, insira um email válido"));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Senha é obrigatória"));
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub is_barber: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Nome é obrigatório"));
        }

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Senha é obrigatória"));
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                "A senha deve ter pelo menos 6 caracteres",
            ));
        }

        if self.password_confirmation.is_empty() {
            errors.push(FieldError::new("password_confirmation", "Confirme sua senha"));
        } else if self.password_confirmation != self.password {
            errors.push(FieldError::new("password_confirmation", "As senhas não coincidem"));
        }

        errors
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            is_barber: self.is_barber,
        }
    }
}
