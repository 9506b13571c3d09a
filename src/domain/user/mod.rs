//! User domain
//!
//! The user entity with its validation, lifecycle transitions and
//! response sanitization, plus the storage collaborator trait.

mod entity;
mod locale;
mod password;
mod patch;
mod repository;
mod validation;

pub use entity::{
    normalize_email, normalize_username, SanitizeOptions, User, SANITIZE_AUTH_SERVICE,
    SANITIZE_EMAIL, SANITIZE_FULL_NAME,
};
pub use locale::{default_user_timezone, is_valid_locale, DEFAULT_LOCALE};
pub use password::{compare_password, hash_password, is_password_hash, PASSWORD_HASH_COST};
pub use patch::{UserAuth, UserPatch};
pub use repository::UserRepository;
pub use validation::{
    invalid_user_error, validate_password, USER_CONTACT_NUMBER_MAX_LENGTH, USER_EMAIL_MAX_LENGTH,
    USER_FIRST_NAME_MAX_RUNES, USER_LAST_NAME_MAX_RUNES, USER_PASSWORD_MAX_LENGTH,
    USER_TIMEZONE_MAX_LENGTH,
};

#[cfg(test)]
pub use repository::MockUserRepository;
