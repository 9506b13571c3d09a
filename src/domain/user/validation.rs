//! User validation
//!
//! Checks run in a fixed order and stop at the first failure, so a caller
//! always receives a single error naming the offending field.

use crate::domain::common::{is_valid_email, is_valid_id};
use crate::domain::error::{AppError, STATUS_BAD_REQUEST};

use super::entity::User;
use super::locale::is_valid_locale;
use super::password::is_password_hash;

pub const USER_EMAIL_MAX_LENGTH: usize = 32;
pub const USER_FIRST_NAME_MAX_RUNES: usize = 64;
pub const USER_LAST_NAME_MAX_RUNES: usize = 64;
pub const USER_PASSWORD_MAX_LENGTH: usize = 32;
pub const USER_CONTACT_NUMBER_MAX_LENGTH: usize = 20;
pub const USER_TIMEZONE_MAX_LENGTH: usize = 256;

const IS_VALID_WHERE: &str = "User.IsValid";

/// A single field check: `passes` returns `Ok(false)` for a validation
/// failure and `Err` when the check itself could not run.
struct FieldCheck {
    field: &'static str,
    passes: fn(&User) -> Result<bool, AppError>,
}

const USER_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        field: "id",
        passes: |u| Ok(is_valid_id(&u.id)),
    },
    FieldCheck {
        field: "create_at",
        passes: |u| Ok(u.created_at != 0),
    },
    FieldCheck {
        field: "update_at",
        passes: |u| Ok(u.updated_at != 0),
    },
    FieldCheck {
        field: "email",
        passes: |u| {
            Ok(u.email.len() <= USER_EMAIL_MAX_LENGTH
                && !u.email.is_empty()
                && is_valid_email(&u.email))
        },
    },
    FieldCheck {
        field: "first_name",
        passes: |u| Ok(u.first_name.chars().count() <= USER_FIRST_NAME_MAX_RUNES),
    },
    FieldCheck {
        field: "last_name",
        passes: |u| Ok(u.last_name.chars().count() <= USER_LAST_NAME_MAX_RUNES),
    },
    FieldCheck {
        field: "auth_data_type",
        passes: |u| Ok(!(u.has_auth_data() && u.auth_service.is_empty())),
    },
    FieldCheck {
        field: "auth_data_pwd",
        passes: |u| Ok(!(!u.password.is_empty() && u.has_auth_data())),
    },
    FieldCheck {
        field: "password_limit",
        passes: |u| {
            Ok(is_password_hash(&u.password) || u.password.len() <= USER_PASSWORD_MAX_LENGTH)
        },
    },
    FieldCheck {
        field: "locale",
        passes: |u| Ok(is_valid_locale(&u.locale)),
    },
    FieldCheck {
        field: "timezone_limit",
        passes: timezone_within_limit,
    },
    FieldCheck {
        field: "contact_number_limit",
        passes: |u| Ok(u.contact_number.len() <= USER_CONTACT_NUMBER_MAX_LENGTH),
    },
];

fn timezone_within_limit(user: &User) -> Result<bool, AppError> {
    if user.timezone.is_empty() {
        return Ok(true);
    }

    // A string map always encodes; the marshal error is kept for the wire contract
    let encoded = serde_json::to_string(&user.timezone).map_err(|e| {
        AppError::internal(
            IS_VALID_WHERE,
            "model.user.is_valid.marshal.app_error",
            e.to_string(),
        )
    })?;

    Ok(encoded.len() <= USER_TIMEZONE_MAX_LENGTH)
}

/// Validation error for a user field, e.g. `model.user.is_valid.email.app_error`
pub fn invalid_user_error(field: &str, user_id: &str) -> AppError {
    let details = if user_id.is_empty() {
        String::new()
    } else {
        format!("user_id={}", user_id)
    };

    AppError::new(
        IS_VALID_WHERE,
        format!("model.user.is_valid.{}.app_error", field),
        None,
        details,
        STATUS_BAD_REQUEST,
    )
}

/// Check a plaintext password before it is hashed
pub fn validate_password(password: &str, user_id: &str) -> Result<(), AppError> {
    if password.len() > USER_PASSWORD_MAX_LENGTH {
        return Err(invalid_user_error("password_limit", user_id));
    }

    Ok(())
}

impl User {
    /// Validate the user, returning the first failing check.
    ///
    /// Read-only: normalization happens in [`User::pre_save`] and
    /// [`User::pre_update`], so an uppercase email fails here.
    pub fn is_valid(&self) -> Result<(), AppError> {
        for check in USER_CHECKS {
            if !(check.passes)(self)? {
                // The id itself is unusable when its own check fails
                let user_id = if check.field == "id" { "" } else { self.id.as_str() };
                return Err(invalid_user_error(check.field, user_id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{get_millis, new_id};

    fn valid_user() -> User {
        let now = get_millis();

        User {
            id: new_id(),
            created_at: now,
            updated_at: now,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            locale: "en".to_string(),
            ..Default::default()
        }
    }

    fn assert_field_error(user: &User, field: &str) {
        let err = user.is_valid().unwrap_err();
        assert_eq!(err.id, format!("model.user.is_valid.{}.app_error", field));
        assert_eq!(err.status_code, STATUS_BAD_REQUEST);
        assert_eq!(err.location, "User.IsValid");
    }

    #[test]
    fn test_valid_user() {
        assert!(valid_user().is_valid().is_ok());
    }

    #[test]
    fn test_invalid_ids() {
        for id in ["", "short", "abcdefghijklmnopqrstuvwxyz1", "abcdefghijklmnopqrstuvwxy-"] {
            let mut user = valid_user();
            user.id = id.to_string();

            assert_field_error(&user, "id");
            assert_eq!(user.is_valid().unwrap_err().detailed_error, "");
        }
    }

    #[test]
    fn test_missing_timestamps() {
        let mut user = valid_user();
        user.created_at = 0;
        assert_field_error(&user, "create_at");

        let mut user = valid_user();
        user.updated_at = 0;
        assert_field_error(&user, "update_at");
    }

    #[test]
    fn test_error_detail_carries_user_id() {
        let mut user = valid_user();
        user.email = String::new();

        let err = user.is_valid().unwrap_err();
        assert_eq!(err.detailed_error, format!("user_id={}", user.id));
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "Alice@example.com",
            "alice",
            "alice <alice@example.com>",
            "a-very-long-local-part@example-domain.com",
        ] {
            let mut user = valid_user();
            user.email = email.to_string();
            assert_field_error(&user, "email");
        }
    }

    #[test]
    fn test_first_name_counts_runes() {
        let mut user = valid_user();
        user.first_name = "é".repeat(USER_FIRST_NAME_MAX_RUNES);
        assert!(user.first_name.len() > USER_FIRST_NAME_MAX_RUNES);
        assert!(user.is_valid().is_ok());

        user.first_name = "é".repeat(USER_FIRST_NAME_MAX_RUNES + 1);
        assert_field_error(&user, "first_name");
    }

    #[test]
    fn test_last_name_too_long() {
        let mut user = valid_user();
        user.last_name = "日".repeat(USER_LAST_NAME_MAX_RUNES + 1);
        assert_field_error(&user, "last_name");
    }

    #[test]
    fn test_auth_data_requires_service() {
        let mut user = valid_user();
        user.auth_data = Some("external-id".to_string());
        assert_field_error(&user, "auth_data_type");

        user.auth_service = "gitlab".to_string();
        assert!(user.is_valid().is_ok());
    }

    #[test]
    fn test_empty_auth_data_needs_no_service() {
        let mut user = valid_user();
        user.auth_data = Some(String::new());
        assert!(user.is_valid().is_ok());
    }

    #[test]
    fn test_password_and_auth_data_exclusive() {
        let mut user = valid_user();
        user.auth_data = Some("external-id".to_string());
        user.auth_service = "gitlab".to_string();
        user.password = "secret".to_string();
        assert_field_error(&user, "auth_data_pwd");
    }

    #[test]
    fn test_password_limit() {
        let mut user = valid_user();
        user.password = "p".repeat(USER_PASSWORD_MAX_LENGTH);
        assert!(user.is_valid().is_ok());

        user.password = "p".repeat(USER_PASSWORD_MAX_LENGTH + 1);
        assert_field_error(&user, "password_limit");
    }

    #[test]
    fn test_hashed_password_passes_limit() {
        let mut user = valid_user();
        user.password = crate::domain::user::hash_password("secret");
        assert!(user.password.len() > USER_PASSWORD_MAX_LENGTH);
        assert!(user.is_valid().is_ok());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password(&"p".repeat(USER_PASSWORD_MAX_LENGTH), "").is_ok());

        let err = validate_password(&"p".repeat(USER_PASSWORD_MAX_LENGTH + 1), "abc").unwrap_err();
        assert_eq!(err.id, "model.user.is_valid.password_limit.app_error");
        assert_eq!(err.detailed_error, "user_id=abc");
    }

    #[test]
    fn test_locale_must_be_supported() {
        let mut user = valid_user();
        user.locale = "xx".to_string();
        assert_field_error(&user, "locale");

        user.locale = String::new();
        assert_field_error(&user, "locale");
    }

    #[test]
    fn test_timezone_limit() {
        let mut user = valid_user();
        user.timezone.insert("manualTimezone".to_string(), "x".repeat(300));
        assert_field_error(&user, "timezone_limit");
    }

    #[test]
    fn test_empty_timezone_is_not_checked() {
        let user = valid_user();
        assert!(user.timezone.is_empty());
        assert!(user.is_valid().is_ok());
    }

    #[test]
    fn test_contact_number_limit() {
        let mut user = valid_user();
        user.contact_number = "1".repeat(USER_CONTACT_NUMBER_MAX_LENGTH + 1);
        assert_field_error(&user, "contact_number_limit");
    }

    #[test]
    fn test_first_failure_wins() {
        let mut user = valid_user();
        user.email = "BAD".to_string();
        user.locale = "xx".to_string();
        user.contact_number = "1".repeat(40);

        assert_field_error(&user, "email");
    }
}
